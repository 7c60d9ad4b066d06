//! Non-fatal events recorded during a run.
//!
//! Every diagnostic is kept in the [`Diagnostics`] collector of the run that
//! produced it and is also emitted as a `tracing` event, which the CLI renders
//! as one line on stderr.

use std::fmt::{Display, Formatter};

use crate::error::{ConfigEntryError, DecodeError};

#[derive(Debug)]
pub enum Diagnostic {
    /// A language declaration was dropped by the registry.
    LanguageSkipped(ConfigEntryError),

    /// A language's resource file could not be decoded; its column stays empty.
    DecodeFailed {
        language: String,
        id: u32,
        error: DecodeError,
    },

    /// A declared language has no value for a key; the cell is exported empty.
    MissingValue { language: String, key: String },
}

impl Diagnostic {
    /// Whether this diagnostic drops a whole language.
    pub fn is_language_level(&self) -> bool {
        matches!(
            self,
            Diagnostic::LanguageSkipped(_) | Diagnostic::DecodeFailed { .. }
        )
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::LanguageSkipped(reason) => write!(f, "{}", reason),
            Diagnostic::DecodeFailed {
                language,
                id,
                error: DecodeError::NotFound(_),
            } => write!(
                f,
                "Language {} is missing a language file (id {}). Skipping",
                language, id
            ),
            Diagnostic::DecodeFailed {
                language, error, ..
            } => write!(
                f,
                "Error while parsing language file for {}: {}",
                language, error
            ),
            Diagnostic::MissingValue { language, key } => write!(
                f,
                "Language {} is missing value for key {}. Using empty string.",
                language, key
            ),
        }
    }
}

/// Ordered collection of the diagnostics produced by one run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and emits it as a log event.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::MissingValue { .. } => tracing::info!("{}", diagnostic),
            _ => tracing::warn!("{}", diagnostic),
        }
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diagnostics that dropped a declared or accepted language.
    pub fn language_level(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.is_language_level())
    }

    /// Number of `(key, language)` cells that were exported empty.
    pub fn missing_value_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| matches!(d, Diagnostic::MissingValue { .. }))
            .count()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_missing_file_message() {
        let diagnostic = Diagnostic::DecodeFailed {
            language: "French".to_string(),
            id: 2,
            error: DecodeError::NotFound(PathBuf::from("languages/language.2.bin")),
        };
        assert_eq!(
            diagnostic.to_string(),
            "Language French is missing a language file (id 2). Skipping"
        );
    }

    #[test]
    fn test_corrupt_file_message() {
        let diagnostic = Diagnostic::DecodeFailed {
            language: "French".to_string(),
            id: 2,
            error: DecodeError::TrailingData(3),
        };
        let message = diagnostic.to_string();
        assert!(message.starts_with("Error while parsing language file for French"));
        assert!(message.contains("trailing"));
    }

    #[test]
    fn test_collector_counts() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::LanguageSkipped(ConfigEntryError::MissingName));
        diagnostics.push(Diagnostic::MissingValue {
            language: "English".to_string(),
            key: "Farewell".to_string(),
        });
        diagnostics.push(Diagnostic::MissingValue {
            language: "English".to_string(),
            key: "Greeting".to_string(),
        });

        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics.missing_value_count(), 2);
        assert_eq!(diagnostics.language_level().count(), 1);
        assert_eq!(
            diagnostics.iter().nth(1).map(ToString::to_string).as_deref(),
            Some("Language English is missing value for key Farewell. Using empty string.")
        );
    }
}
