//! CLI library for testing purposes

pub mod export;
pub mod languages;
pub mod validation;
pub mod view;

pub use export::run_export_command;
pub use languages::{format_language_table, run_languages_command};
pub use view::{preview, run_view_command};
