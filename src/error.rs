use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while compiling snippets and translations.
///
/// `Generation` and `Translation` are per-item failures: the compiler records
/// them and moves on. The remaining variants abort the run.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Error generating code for {language}: {message}")]
    Generation { language: String, message: String },

    #[error("Error translating {language} snippet to {code}: {message}")]
    Translation {
        language: String,
        code: String,
        message: String,
    },

    #[error("Unsupported translation language code: '{0}'")]
    UnsupportedLanguage(String),

    #[error("Cannot select {requested} {catalog} languages, catalog only has {available}")]
    SampleTooLarge {
        requested: usize,
        available: usize,
        catalog: &'static str,
    },

    #[error("Filesystem error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CompileError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Programming language the failure belongs to, for per-item failures.
    pub fn language(&self) -> Option<&str> {
        match self {
            Self::Generation { language, .. } | Self::Translation { language, .. } => {
                Some(language)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_message() {
        let err = CompileError::Generation {
            language: "Ruby".to_string(),
            message: "model offline".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error generating code for Ruby: model offline"
        );
        assert_eq!(err.language(), Some("Ruby"));
    }

    #[test]
    fn test_translation_error_message() {
        let err = CompileError::Translation {
            language: "Java".to_string(),
            code: "zh".to_string(),
            message: "timeout".to_string(),
        };
        assert!(err.to_string().contains("zh"));
        assert!(err.to_string().contains("Java"));
        assert_eq!(err.language(), Some("Java"));
    }

    #[test]
    fn test_sample_too_large_message() {
        let err = CompileError::SampleTooLarge {
            requested: 6,
            available: 5,
            catalog: "programming",
        };
        assert!(err.to_string().contains("6 programming"));
        assert!(err.to_string().contains("only has 5"));
        assert_eq!(err.language(), None);
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = CompileError::io(
            "/tmp/out",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("/tmp/out"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
