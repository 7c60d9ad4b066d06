use langdump::{LangFile, traits::Parser};
use unicode_width::UnicodeWidthChar;

use crate::validation::validate_file_path;

const PREVIEW_WIDTH: usize = 50;

/// Print the entries of a single `language.<id>.bin` file in file order.
pub fn run_view_command(input: &str, full: bool) -> Result<(), String> {
    validate_file_path(input)?;
    let file = LangFile::read_from(input).map_err(|e| format!("{}: {}", input, e))?;

    println!("Entries: {}", file.len());
    for (i, (key, value)) in file.entries.iter().enumerate() {
        println!("\n  Entry {}: {}", i + 1, key);
        if full {
            println!("    Value: {}", value);
        } else {
            println!("    Value: {}", preview(value, PREVIEW_WIDTH));
        }
    }
    Ok(())
}

/// Single-line preview of a value, cut at `max_width` display columns.
pub fn preview(value: &str, max_width: usize) -> String {
    let escaped = value.replace('\n', "\\n");
    let mut width = 0;
    let mut out = String::new();
    for c in escaped.chars() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            out.push_str("...");
            return out;
        }
        out.push(c);
    }
    out
}
