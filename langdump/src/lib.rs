#![forbid(unsafe_code)]
//! Reconcile a game's per-language string tables into one tab-separated export.
//!
//! Games often ship one opaque binary string table per language. langdump
//! reads the declared languages, decodes every table and merges them into a
//! single table keyed by string key, with one column per language.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use langdump::{ExportOptions, export_game_languages};
//!
//! let report = export_game_languages(
//!     "LanguageTypes.xml",
//!     "/path/to/game",
//!     "strings.tsv",
//!     &ExportOptions::default(),
//! )?;
//! println!("{} keys, {} diagnostics", report.table.len(), report.diagnostics.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Pipeline
//!
//! 1. [`registry`]: validates declarations (drops `Template`, bad ids, duplicates)
//! 2. [`source`]: decodes each language through a [`ResourceDecoder`]
//! 3. [`reconcile`]: merges entries into a [`ReconciliationTable`]
//! 4. [`formats::tsv`]: writes the sorted, newline-escaped export
//!
//! Problems with single declarations or single languages never abort a run;
//! they are collected as [`Diagnostic`]s and logged through `tracing`.

pub mod diagnostics;
pub mod error;
pub mod formats;
pub mod options;
pub mod pipeline;
pub mod reconcile;
pub mod registry;
pub mod source;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    diagnostics::{Diagnostic, Diagnostics},
    error::{ConfigEntryError, DecodeError, Error},
    formats::{LangFile, LanguageTypes, TsvFormat},
    options::ExportOptions,
    pipeline::{PipelineReport, export_game_languages, read_language_types, run},
    reconcile::ReconciliationTable,
    registry::LanguageRegistry,
    source::{LanguageDirectory, ResourceDecoder},
    types::{
        ExportTable, LanguageDeclaration, LanguageDescriptor, LocalizedEntry, ReconciliationRow,
    },
};
