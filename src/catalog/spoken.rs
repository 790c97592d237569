//! Spoken languages the translator can target.
//!
//! The set is fixed: every snippet is generated in English and translated
//! into one of these.

use crate::error::CompileError;

/// A supported translation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpokenLanguage {
    /// ISO 639-1 language code (e.g. "es", "zh")
    pub code: &'static str,

    /// English name of the language
    pub name: &'static str,

    /// Name of the language in the language itself
    pub native_name: &'static str,
}

/// Every translation target, in catalog order.
pub const SPOKEN_LANGUAGES: &[SpokenLanguage] = &[
    SpokenLanguage {
        code: "es",
        name: "Spanish",
        native_name: "Español",
    },
    SpokenLanguage {
        code: "fr",
        name: "French",
        native_name: "Français",
    },
    SpokenLanguage {
        code: "de",
        name: "German",
        native_name: "Deutsch",
    },
    SpokenLanguage {
        code: "zh",
        name: "Chinese",
        native_name: "中文",
    },
    SpokenLanguage {
        code: "ru",
        name: "Russian",
        native_name: "Русский",
    },
];

impl SpokenLanguage {
    /// Look up a supported language by code.
    ///
    /// # Errors
    /// Returns `CompileError::UnsupportedLanguage` for codes outside the
    /// supported set.
    pub fn from_code(code: &str) -> Result<SpokenLanguage, CompileError> {
        SPOKEN_LANGUAGES
            .iter()
            .find(|lang| lang.code == code)
            .copied()
            .ok_or_else(|| CompileError::UnsupportedLanguage(code.to_string()))
    }

    /// Codes of all supported languages, in catalog order.
    pub fn codes() -> impl Iterator<Item = &'static str> {
        SPOKEN_LANGUAGES.iter().map(|lang| lang.code)
    }

    /// File name of a translation in this language.
    pub fn translation_file_name(code: &str) -> String {
        format!("hello_world_{}.txt", code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known() {
        let chinese = SpokenLanguage::from_code("zh").expect("Should exist");
        assert_eq!(chinese.name, "Chinese");
        assert_eq!(chinese.native_name, "中文");
    }

    #[test]
    fn test_from_code_unknown() {
        let err = SpokenLanguage::from_code("en").unwrap_err();
        assert!(matches!(err, CompileError::UnsupportedLanguage(ref c) if c == "en"));
        assert!(SpokenLanguage::from_code("").is_err());
        assert!(SpokenLanguage::from_code("ES").is_err());
    }

    #[test]
    fn test_codes_in_catalog_order() {
        let codes: Vec<_> = SpokenLanguage::codes().collect();
        assert_eq!(codes, vec!["es", "fr", "de", "zh", "ru"]);
    }

    #[test]
    fn test_translation_file_name() {
        assert_eq!(SpokenLanguage::translation_file_name("fr"), "hello_world_fr.txt");
    }
}
