//! File formats read and written by langdump.
//!
//! - [`language_types`]: the `LanguageTypes.xml` declaration document (input)
//! - [`lang_file`]: the binary `language.<id>.bin` string tables (input)
//! - [`tsv`]: the tab-separated export (output)

pub mod lang_file;
pub mod language_types;
pub mod tsv;

// Reexporting the formats for easier access
pub use lang_file::{LangFile, language_file_name};
pub use language_types::LanguageTypes;
pub use tsv::Format as TsvFormat;
