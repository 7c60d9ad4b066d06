//! Validation of declared languages.
//!
//! The registry turns raw [`LanguageDeclaration`]s into the ordered list of
//! [`LanguageDescriptor`]s that drives decoding and defines the export's column
//! order. Nothing here is fatal: rejected declarations become diagnostics.

use crate::{
    diagnostics::{Diagnostic, Diagnostics},
    error::ConfigEntryError,
    types::{LanguageDeclaration, LanguageDescriptor, TEMPLATE_LANGUAGE_NAME},
};

/// The accepted languages of one run, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageRegistry {
    languages: Vec<LanguageDescriptor>,
}

impl LanguageRegistry {
    /// Validates declarations in order, keeping the first occurrence of every
    /// name and every id.
    pub fn register<I>(declarations: I, diagnostics: &mut Diagnostics) -> Self
    where
        I: IntoIterator<Item = LanguageDeclaration>,
    {
        let mut registry = LanguageRegistry::default();
        for declaration in declarations {
            match registry.accept(declaration) {
                Ok(Some(descriptor)) => registry.languages.push(descriptor),
                Ok(None) => {}
                Err(reason) => diagnostics.push(Diagnostic::LanguageSkipped(reason)),
            }
        }
        registry
    }

    /// Checks one declaration against the languages accepted so far.
    /// `Ok(None)` is the silently dropped template row.
    fn accept(
        &self,
        declaration: LanguageDeclaration,
    ) -> Result<Option<LanguageDescriptor>, ConfigEntryError> {
        let name = match declaration.name {
            Some(name) if name == TEMPLATE_LANGUAGE_NAME => return Ok(None),
            Some(name) => name,
            None => return Err(ConfigEntryError::MissingName),
        };

        if self.find_by_name(&name).is_some() {
            return Err(ConfigEntryError::DuplicateName { name });
        }

        let Some(raw_id) = declaration.id else {
            return Err(ConfigEntryError::MissingId { name });
        };

        let id = match parse_language_id(&raw_id) {
            Some(id) => id,
            None => return Err(ConfigEntryError::InvalidId { name, id: raw_id }),
        };

        if self.find_by_id(id).is_some() {
            return Err(ConfigEntryError::DuplicateId { name, id });
        }

        Ok(Some(LanguageDescriptor { name, id }))
    }

    pub fn languages(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageDescriptor> {
        self.languages.iter()
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|l| l.name == name)
    }

    pub fn find_by_id(&self, id: u32) -> Option<&LanguageDescriptor> {
        self.languages.iter().find(|l| l.id == id)
    }

    pub fn into_languages(self) -> Vec<LanguageDescriptor> {
        self.languages
    }
}

/// Parses a non-negative integer id, ignoring surrounding whitespace.
pub fn parse_language_id(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

/// Convenience wrapper returning just the accepted descriptors.
pub fn register<I>(declarations: I, diagnostics: &mut Diagnostics) -> Vec<LanguageDescriptor>
where
    I: IntoIterator<Item = LanguageDeclaration>,
{
    LanguageRegistry::register(declarations, diagnostics).into_languages()
}
