//! The reconciliation table: one row per string key, one value per language.

use std::collections::BTreeMap;

use crate::{
    diagnostics::{Diagnostic, Diagnostics},
    types::{ExportTable, LanguageDescriptor, LocalizedEntry, ReconciliationRow},
};

/// Merges per-language entries into rows keyed by string key.
///
/// The table owns every row for the lifetime of one run. Rows are kept in a
/// `BTreeMap` so that iteration is always in ascending ordinal key order,
/// independent of the order decoders emitted them in.
#[derive(Debug, Clone, Default)]
pub struct ReconciliationTable {
    languages: Vec<LanguageDescriptor>,
    rows: BTreeMap<String, ReconciliationRow>,
}

impl ReconciliationTable {
    /// Creates an empty table whose columns are `languages`, in that order.
    pub fn new(languages: Vec<LanguageDescriptor>) -> Self {
        Self {
            languages,
            rows: BTreeMap::new(),
        }
    }

    /// Adds one language's decoded entries. A key repeated within the same
    /// language keeps its last value.
    pub fn ingest<I, K, V>(&mut self, language_id: u32, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self.insert(LocalizedEntry {
                key: key.into(),
                language_id,
                value: value.into(),
            });
        }
    }

    /// Sets a single cell, creating the row if needed.
    pub fn insert(&mut self, entry: LocalizedEntry) {
        let LocalizedEntry {
            key,
            language_id,
            value,
        } = entry;
        self.rows.entry(key).or_default().set(language_id, value);
    }

    /// Records one diagnostic for every `(key, declared language)` pair
    /// without a value. Rows are left untouched.
    pub fn report_missing(&self, diagnostics: &mut Diagnostics) {
        for (key, row) in &self.rows {
            for language in &self.languages {
                if !row.has_language(language.id) {
                    diagnostics.push(Diagnostic::MissingValue {
                        language: language.name.clone(),
                        key: key.clone(),
                    });
                }
            }
        }
    }

    /// Read-only view for the exporter.
    pub fn snapshot(&self) -> ExportTable<'_> {
        ExportTable {
            languages: &self.languages,
            rows: &self.rows,
        }
    }

    pub fn languages(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    pub fn get(&self, key: &str) -> Option<&ReconciliationRow> {
        self.rows.get(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
