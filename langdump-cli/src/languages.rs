use langdump::{Diagnostics, LanguageDescriptor, LanguageRegistry, read_language_types};
use serde_json::json;
use unicode_width::UnicodeWidthStr;

use crate::validation::validate_language_types;

/// Run the languages command: print the languages an export would contain,
/// in column order.
pub fn run_languages_command(language_types: &str, json_output: bool) -> Result<(), String> {
    validate_language_types(language_types)?;
    let declarations = read_language_types(language_types).map_err(|e| e.to_string())?;

    let mut diagnostics = Diagnostics::new();
    let registry = LanguageRegistry::register(declarations, &mut diagnostics);

    if json_output {
        let value = json!({
            "languages": registry.languages(),
            "skipped": diagnostics.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
        });
        let rendered = serde_json::to_string_pretty(&value).map_err(|e| e.to_string())?;
        println!("{}", rendered);
    } else {
        print!("{}", format_language_table(registry.languages()));
    }
    Ok(())
}

/// Two-column table of names and ids, names padded to their display width.
pub fn format_language_table(languages: &[LanguageDescriptor]) -> String {
    let width = languages
        .iter()
        .map(|l| l.name.width())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = format!("{}  ID\n", pad("Name", width));
    for language in languages {
        out.push_str(&format!("{}  {}\n", pad(&language.name, width), language.id));
    }
    out
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
