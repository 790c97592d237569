//! The compile pipeline: select languages, generate a snippet per programming
//! language, translate it per spoken language, and write everything to disk.
//!
//! Layout produced under the output directory:
//!
//! ```text
//! <output>/<Language>/hello_world.<language lowercased>
//! <output>/<Language>/hello_world_<code>.txt
//! ```
//!
//! A language's directory is only created once its snippet was generated, so
//! a language whose generation failed leaves nothing behind.

use crate::catalog::{Catalog, ProgrammingLanguage, Selection, SpokenLanguage};
use crate::error::CompileError;
use crate::generator::CodeGenerator;
use crate::translation::Translator;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Files written for one programming language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOutput {
    /// Generated snippet
    pub code: PathBuf,
    /// Spoken-language code -> translated snippet
    pub translations: BTreeMap<String, PathBuf>,
}

/// Outcome of a compile run.
#[derive(Debug, Default)]
pub struct CompileResult {
    /// Programming language name -> files written for it. Languages whose
    /// generation failed have no entry.
    pub languages: BTreeMap<String, LanguageOutput>,
    /// Generation and translation failures, in the order they happened
    pub failures: Vec<CompileError>,
}

impl CompileResult {
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn get(&self, language: &str) -> Option<&LanguageOutput> {
        self.languages.get(language)
    }
}

pub struct Compiler<G, T> {
    catalog: Catalog,
    generator: G,
    translator: T,
}

impl<G: CodeGenerator, T: Translator> Compiler<G, T> {
    pub fn new(catalog: Catalog, generator: G, translator: T) -> Self {
        Self {
            catalog,
            generator,
            translator,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the pipeline with a fresh random selection.
    ///
    /// # Errors
    /// Fails when a count exceeds its catalog or on any filesystem error.
    /// Model failures never fail the run; they are collected in
    /// `CompileResult::failures`.
    pub async fn compile(
        &self,
        output_dir: impl AsRef<Path>,
        num_programming_languages: usize,
        num_spoken_languages: usize,
    ) -> Result<CompileResult, CompileError> {
        let output_dir = output_dir.as_ref();
        create_dir(output_dir).await?;

        info!("Selecting languages...");
        let selection = self.catalog.select(
            num_programming_languages,
            num_spoken_languages,
            &mut rand::rng(),
        )?;

        self.compile_selection(output_dir, &selection).await
    }

    /// Run the pipeline for an explicit selection.
    pub async fn compile_selection(
        &self,
        output_dir: &Path,
        selection: &Selection,
    ) -> Result<CompileResult, CompileError> {
        create_dir(output_dir).await?;

        let mut result = CompileResult::default();

        for language in &selection.programming {
            let code = match self.generator.generate(language).await {
                Ok(code) => code,
                Err(e) => {
                    let failure = CompileError::Generation {
                        language: language.name().to_string(),
                        message: format!("{:#}", e),
                    };
                    warn!("{}", failure);
                    result.failures.push(failure);
                    continue;
                }
            };

            let output = self
                .persist_language(
                    output_dir,
                    language,
                    &code,
                    &selection.spoken,
                    &mut result.failures,
                )
                .await?;
            result.languages.insert(language.name().to_string(), output);
        }

        info!(
            "Compiled {}/{} programming languages ({} failures)",
            result.languages.len(),
            selection.programming.len(),
            result.failures.len()
        );

        Ok(result)
    }

    async fn persist_language(
        &self,
        output_dir: &Path,
        language: &ProgrammingLanguage,
        code: &str,
        spoken: &[String],
        failures: &mut Vec<CompileError>,
    ) -> Result<LanguageOutput, CompileError> {
        let language_dir = output_dir.join(language.name());
        create_dir(&language_dir).await?;

        let code_path = language_dir.join(language.code_file_name());
        info!("Writing code to {}...", code_path.display());
        write_file(&code_path, code).await?;

        let mut translations = BTreeMap::new();
        for target in spoken {
            let translated = match self.translator.translate(code, target).await {
                Ok(text) => text,
                Err(e) => {
                    let failure = CompileError::Translation {
                        language: language.name().to_string(),
                        code: target.clone(),
                        message: format!("{:#}", e),
                    };
                    warn!("{}", failure);
                    failures.push(failure);
                    continue;
                }
            };

            let path = language_dir.join(SpokenLanguage::translation_file_name(target));
            info!("Writing translation to {}...", path.display());
            write_file(&path, &translated).await?;
            translations.insert(target.clone(), path);
        }

        Ok(LanguageOutput {
            code: code_path,
            translations,
        })
    }
}

async fn create_dir(path: &Path) -> Result<(), CompileError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| CompileError::io(path, e))
}

async fn write_file(path: &Path, contents: &str) -> Result<(), CompileError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| CompileError::io(path, e))
}
