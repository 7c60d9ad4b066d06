//! Core types shared by the registry, the reconciliation table and the exporter.
//! Decoders produce [`LocalizedEntry`] values; the exporter reads an [`ExportTable`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name of the reserved control row in the language configuration.
pub const TEMPLATE_LANGUAGE_NAME: &str = "Template";

/// One `LanguageType` declaration as it appears in the configuration document,
/// before any validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct LanguageDeclaration {
    /// Display name (`LanguageName` attribute), if present.
    pub name: Option<String>,

    /// Raw numeric id text (`LanguageID` element), if present.
    pub id: Option<String>,
}

impl LanguageDeclaration {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: Some(id.into()),
        }
    }
}

/// A validated language: unique name, unique numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct LanguageDescriptor {
    pub name: String,
    pub id: u32,
}

impl LanguageDescriptor {
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

impl std::fmt::Display for LanguageDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (id {})", self.name, self.id)
    }
}

/// A single decoded string for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedEntry {
    pub key: String,
    pub language_id: u32,
    pub value: String,
}

/// All known values for one string key, indexed by language id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReconciliationRow {
    values: BTreeMap<u32, String>,
}

impl ReconciliationRow {
    /// Sets the value for a language, replacing any earlier one.
    pub(crate) fn set(&mut self, language_id: u32, value: String) -> Option<String> {
        self.values.insert(language_id, value)
    }

    /// Gets the value for a language, if that language provided one.
    pub fn value(&self, language_id: u32) -> Option<&str> {
        self.values.get(&language_id).map(String::as_str)
    }

    /// Returns `true` when the given language provided a value for this key.
    pub fn has_language(&self, language_id: u32) -> bool {
        self.values.contains_key(&language_id)
    }

    /// Number of languages with a value for this key.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Read-only view of a reconciled table: the declared languages (column
/// order) and every row, ordered by key.
#[derive(Debug, Clone, Copy)]
pub struct ExportTable<'a> {
    pub(crate) languages: &'a [LanguageDescriptor],
    pub(crate) rows: &'a BTreeMap<String, ReconciliationRow>,
}

impl<'a> ExportTable<'a> {
    /// Declared languages in column order.
    pub fn languages(&self) -> &'a [LanguageDescriptor] {
        self.languages
    }

    /// Rows in ascending ordinal key order.
    pub fn rows(self) -> impl Iterator<Item = (&'a str, &'a ReconciliationRow)> + 'a {
        self.rows.iter().map(|(key, row)| (key.as_str(), row))
    }

    pub fn row(&self, key: &str) -> Option<&'a ReconciliationRow> {
        self.rows.get(key)
    }

    /// The value exported for a cell: the language's value, or the empty
    /// string when that language never provided one.
    pub fn cell(&self, key: &str, language_id: u32) -> &'a str {
        self.rows
            .get(key)
            .and_then(|row| row.value(language_id))
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
