//! Tab-separated export of a reconciled table.
//!
//! ```text
//! StringKey<TAB>English<TAB>French
//! Farewell<TAB><TAB>Au revoir
//! Greeting<TAB>Hello<TAB>Bonjour
//! ```
//!
//! The first column is the string key, followed by one column per declared
//! language in registry order. Rows are sorted by key (ordinal) and separated
//! by `\n` with no trailing newline. Literal newlines inside values are written
//! as the two characters `\n`; nothing else is escaped, so a value containing a
//! tab will shift the remaining columns of its row.

use std::{borrow::Cow, io::Write};

use crate::{traits::Writer, types::ExportTable};

/// Header of the key column.
pub const KEY_COLUMN: &str = "StringKey";

const COLUMN_SEPARATOR: char = '\t';
const ROW_SEPARATOR: char = '\n';

/// Serializer for an [`ExportTable`].
#[derive(Debug, Clone, Copy)]
pub struct Format<'a> {
    table: ExportTable<'a>,
}

impl<'a> Format<'a> {
    pub fn new(table: ExportTable<'a>) -> Self {
        Self { table }
    }

    /// The header line, without a separator.
    pub fn header(&self) -> String {
        let mut header = String::from(KEY_COLUMN);
        for language in self.table.languages() {
            header.push(COLUMN_SEPARATOR);
            header.push_str(&language.name);
        }
        header
    }

    /// Every data line in output order, without separators.
    pub fn lines(self) -> impl Iterator<Item = String> + 'a {
        let languages = self.table.languages();
        self.table.rows().map(move |(key, row)| {
            let mut line = String::from(key);
            for language in languages {
                line.push(COLUMN_SEPARATOR);
                line.push_str(&escape_value(row.value(language.id).unwrap_or("")));
            }
            line
        })
    }

    /// The whole export as one string, identical to what [`Writer::to_writer`] emits.
    pub fn to_tsv_string(self) -> String {
        let mut out = self.header();
        for line in self.lines() {
            out.push(ROW_SEPARATOR);
            out.push_str(&line);
        }
        out
    }
}

impl<'a> From<ExportTable<'a>> for Format<'a> {
    fn from(table: ExportTable<'a>) -> Self {
        Format::new(table)
    }
}

impl Writer for Format<'_> {
    fn to_writer<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.header().as_bytes())?;
        for line in self.lines() {
            write!(writer, "{}{}", ROW_SEPARATOR, line)?;
        }
        writer.flush()
    }
}

/// Replaces each literal `\n` with the escape sequence backslash-n.
pub fn escape_value(value: &str) -> Cow<'_, str> {
    if value.contains('\n') {
        Cow::Owned(value.replace('\n', "\\n"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Inverse of [`escape_value`] for values that contained no `\n` sequence of
/// their own.
pub fn unescape_value(value: &str) -> Cow<'_, str> {
    if value.contains("\\n") {
        Cow::Owned(value.replace("\\n", "\n"))
    } else {
        Cow::Borrowed(value)
    }
}
