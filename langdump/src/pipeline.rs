//! Orchestration of one export run: registry, decoding, reconciliation, export.
//!
//! Each run owns its own [`ReconciliationTable`] and [`Diagnostics`], so runs
//! are independent and can be repeated within one process. Only two things
//! abort a run: an unusable configuration document and an unwritable output.

use std::{io::Write, path::Path};

use crate::{
    diagnostics::{Diagnostic, Diagnostics},
    error::Error,
    formats::{LanguageTypes, TsvFormat},
    options::ExportOptions,
    reconcile::ReconciliationTable,
    registry::LanguageRegistry,
    source::{LanguageDirectory, ResourceDecoder},
    traits::{Parser, Writer},
    types::{ExportTable, LanguageDeclaration, LanguageDescriptor},
};

/// Outcome of a reconciliation run, ready to be exported.
#[derive(Debug)]
pub struct PipelineReport {
    pub table: ReconciliationTable,
    pub diagnostics: Diagnostics,
    /// Languages whose table decoded successfully, in registry order.
    pub decoded: Vec<LanguageDescriptor>,
}

impl PipelineReport {
    pub fn snapshot(&self) -> ExportTable<'_> {
        self.table.snapshot()
    }

    pub fn languages(&self) -> &[LanguageDescriptor] {
        self.table.languages()
    }

    /// Serializes the table to any writer. Failures are [`Error::Output`]
    /// against the given destination label.
    pub fn export_to_writer<W: Write>(&self, writer: W, destination: &Path) -> Result<(), Error> {
        TsvFormat::new(self.snapshot())
            .to_writer(writer)
            .map_err(|e| Error::output(destination, e))
    }

    /// Serializes the table to a file, creating or truncating it.
    pub fn export_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        TsvFormat::new(self.snapshot()).write_to(path)
    }

    /// Serializes the table into memory.
    pub fn to_tsv_string(&self) -> String {
        TsvFormat::new(self.snapshot()).to_tsv_string()
    }
}

/// Registers `declarations`, decodes every accepted language in order and
/// merges the results. Never fails: every per-entry and per-language problem
/// is recorded in the report's diagnostics.
pub fn run<I, D>(declarations: I, decoder: &D, options: &ExportOptions) -> PipelineReport
where
    I: IntoIterator<Item = LanguageDeclaration>,
    D: ResourceDecoder + ?Sized,
{
    let mut diagnostics = Diagnostics::new();
    let registry = LanguageRegistry::register(declarations, &mut diagnostics);
    tracing::debug!("registered {} language(s)", registry.len());

    let mut table = ReconciliationTable::new(registry.languages().to_vec());
    let mut decoded = Vec::with_capacity(registry.len());

    for language in registry.iter() {
        match decoder.decode(language.id) {
            Ok(entries) => {
                tracing::debug!(
                    "decoded {} entries for {}",
                    entries.len(),
                    language
                );
                table.ingest(language.id, entries);
                decoded.push(language.clone());
            }
            Err(error) => diagnostics.push(Diagnostic::DecodeFailed {
                language: language.name.clone(),
                id: language.id,
                error,
            }),
        }
    }

    if options.report_missing_values {
        table.report_missing(&mut diagnostics);
    }

    PipelineReport {
        table,
        diagnostics,
        decoded,
    }
}

/// Reads the declarations from a `LanguageTypes.xml` document.
pub fn read_language_types<P: AsRef<Path>>(path: P) -> Result<Vec<LanguageDeclaration>, Error> {
    Ok(LanguageTypes::read_from(path)?.into_declarations())
}

/// Full run over a game install: reads the language configuration, decodes
/// `<game_dir>/languages/language.<id>.bin` for every language and writes the
/// export to `output`.
pub fn export_game_languages<P, G, O>(
    language_types: P,
    game_dir: G,
    output: O,
    options: &ExportOptions,
) -> Result<PipelineReport, Error>
where
    P: AsRef<Path>,
    G: AsRef<Path>,
    O: AsRef<Path>,
{
    let declarations = read_language_types(language_types)?;
    let directory = LanguageDirectory::from_game_dir(game_dir);
    let report = run(declarations, &directory, options);
    report.export_to_file(output)?;
    Ok(report)
}
