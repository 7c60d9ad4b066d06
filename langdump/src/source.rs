//! Where per-language entries come from.
//!
//! The pipeline only ever sees the [`ResourceDecoder`] trait. The concrete
//! [`LanguageDirectory`] reads `language.<id>.bin` files; tests can pass a
//! closure instead.

use std::path::{Path, PathBuf};

use crate::{
    error::DecodeError,
    formats::{LangFile, language_file_name},
    traits::Parser,
};

/// Decodes the complete string table of one language, or fails as a whole.
pub trait ResourceDecoder {
    fn decode(&self, language_id: u32) -> Result<Vec<(String, String)>, DecodeError>;
}

impl<F> ResourceDecoder for F
where
    F: Fn(u32) -> Result<Vec<(String, String)>, DecodeError>,
{
    fn decode(&self, language_id: u32) -> Result<Vec<(String, String)>, DecodeError> {
        self(language_id)
    }
}

/// A game's `languages` directory holding one binary table per language id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDirectory {
    root: PathBuf,
}

impl LanguageDirectory {
    /// Name of the directory, relative to the game install, holding the tables.
    pub const DIR_NAME: &'static str = "languages";

    /// Uses `path` directly as the directory holding `language.<id>.bin` files.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { root: path.into() }
    }

    /// Uses the `languages` directory of a game install.
    pub fn from_game_dir(game_dir: impl AsRef<Path>) -> Self {
        Self::new(game_dir.as_ref().join(Self::DIR_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Location of the table for a language id.
    pub fn language_file(&self, language_id: u32) -> PathBuf {
        self.root.join(language_file_name(language_id))
    }
}

impl ResourceDecoder for LanguageDirectory {
    fn decode(&self, language_id: u32) -> Result<Vec<(String, String)>, DecodeError> {
        LangFile::read_from(self.language_file(language_id)).map(LangFile::into_entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::lang_file::test_support::encode;

    #[test]
    fn test_language_directory_paths() {
        let dir = LanguageDirectory::from_game_dir("/games/brawl");
        assert_eq!(dir.path(), Path::new("/games/brawl/languages"));
        assert_eq!(
            dir.language_file(3),
            PathBuf::from("/games/brawl/languages/language.3.bin")
        );
    }

    #[test]
    fn test_language_directory_decodes_file() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("language.1.bin"),
            encode(&[("Greeting", "Hello")]),
        )
        .unwrap();

        let dir = LanguageDirectory::new(temp.path());
        let entries = dir.decode(1).unwrap();
        assert_eq!(entries, vec![("Greeting".to_string(), "Hello".to_string())]);
        assert!(matches!(dir.decode(2), Err(DecodeError::NotFound(_))));
    }

    #[test]
    fn test_closure_decoder() {
        let decoder = |id: u32| -> Result<Vec<(String, String)>, DecodeError> {
            match id {
                1 => Ok(vec![("k".to_string(), "v".to_string())]),
                _ => Err(DecodeError::TrailingData(1)),
            }
        };
        assert_eq!(decoder.decode(1).unwrap().len(), 1);
        assert!(decoder.decode(2).is_err());
    }
}
