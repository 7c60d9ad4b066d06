use langdump::{ExportOptions, export_game_languages};

use crate::validation::{validate_game_dir, validate_language_types, validate_output_path};

/// Run the export command: reconcile every declared language of a game
/// install into one tab-separated file.
pub fn run_export_command(
    game_dir: &str,
    language_types: &str,
    output: &str,
    report_missing_values: bool,
) -> Result<(), String> {
    validate_game_dir(game_dir)?;
    validate_language_types(language_types)?;
    validate_output_path(output)?;
    tracing::debug!("exporting {} using {}", game_dir, language_types);

    let options = ExportOptions::new().with_missing_value_report(report_missing_values);
    let report = export_game_languages(language_types, game_dir, output, &options)
        .map_err(|e| e.to_string())?;

    let skipped = report.diagnostics.language_level().count();
    println!(
        "Exported {} key(s) in {} language(s) to {}",
        report.table.len(),
        report.languages().len(),
        output
    );
    if skipped > 0 || report.diagnostics.missing_value_count() > 0 {
        println!(
            "{} language(s) skipped, {} missing value(s) exported as empty",
            skipped,
            report.diagnostics.missing_value_count()
        );
    }
    Ok(())
}
