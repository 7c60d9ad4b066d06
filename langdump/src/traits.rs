//! Traits for reading inputs and writing the export in langdump.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing one input document (configuration or resource file).
///
/// # Example
///
/// ```rust,no_run
/// use langdump::traits::Parser;
/// let types = langdump::formats::LanguageTypes::read_from("LanguageTypes.xml")?;
/// println!("{} declarations", types.declarations.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser: Sized {
    type Error: From<std::io::Error>;

    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Self::Error>;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Self::Error> {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_reader(Cursor::new(bytes))
    }
}

/// A trait for serializing an export to a writer or a file.
pub trait Writer {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> std::io::Result<()>;

    /// Write to file path. Any failure to create or write the file is an
    /// [`Error::Output`]; a partially written file is left in place.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::output(path, e))?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::output(path, e))
    }
}
