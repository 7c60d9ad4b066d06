//! All error types for the langdump crate.
//!
//! Only [`Error`] ever aborts a run. [`ConfigEntryError`] and [`DecodeError`]
//! are recovered where they happen and reported as diagnostics instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("invalid language configuration: {0}")]
    InvalidConfig(String),

    #[error("writing to {} failed: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }

    /// Creates a new output error for the given destination
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Output {
            path: path.into(),
            source,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlParse(quick_xml::Error::from(value))
    }
}

/// Failure to turn one language's resource file into entries.
///
/// Decoding is all-or-nothing: any of these means the whole language is skipped.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("language file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zlib stream is corrupt: {0}")]
    Inflate(std::io::Error),

    #[error("unexpected end of data while reading {context}")]
    Truncated { context: &'static str },

    #[error("string is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("declared payload size {declared} does not match actual size {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("{0} unexpected trailing byte(s) after the string table")]
    TrailingData(usize),
}

/// A language declaration that was rejected by the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigEntryError {
    #[error("Skipping LanguageType element that is missing a name")]
    MissingName,

    #[error("Duplicate language name {name}. Skipping")]
    DuplicateName { name: String },

    #[error("Language {name} is missing an id element. Skipping")]
    MissingId { name: String },

    #[error("Language {name} has invalid lang id: {id}. Skipping")]
    InvalidId { name: String, id: String },

    #[error("Duplicate language id {id} (declared by {name}). Skipping")]
    DuplicateId { name: String, id: u32 },
}
