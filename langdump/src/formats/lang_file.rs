//! Support for the binary `language.<id>.bin` string table.
//!
//! Layout (all integers big-endian):
//!
//! | bytes  | content                                   |
//! |--------|-------------------------------------------|
//! | 0..4   | `u32` size of the inflated payload        |
//! | 4..    | zlib stream holding the payload            |
//!
//! The payload is a `u32` entry count followed by that many entries. Each
//! entry is a key and a value, each written as a `u16` byte length and that
//! many bytes of UTF-8.
//!
//! Nothing may follow the zlib stream. Decoding is all-or-nothing: a file
//! either yields every entry or an error.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Read},
    path::Path,
};

use flate2::bufread::ZlibDecoder;

use crate::{error::DecodeError, traits::Parser};

/// File name of the string table for a language id.
pub fn language_file_name(id: u32) -> String {
    format!("language.{}.bin", id)
}

/// A decoded string table, in file order. Keys may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LangFile {
    pub entries: Vec<(String, String)>,
}

impl LangFile {
    pub fn into_entries(self) -> Vec<(String, String)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Parser for LangFile {
    type Error = DecodeError;

    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, DecodeError> {
        let mut header = [0u8; 4];
        reader
            .read_exact(&mut header)
            .map_err(|e| truncated_or_io(e, "payload size header"))?;
        let declared = u32::from_be_bytes(header) as usize;

        // Inflate at most one byte past the declared size, enough to detect an oversized stream.
        let mut payload = Vec::new();
        let mut inflater = ZlibDecoder::new(reader).take(declared as u64 + 1);
        inflater
            .read_to_end(&mut payload)
            .map_err(DecodeError::Inflate)?;

        if payload.len() != declared {
            return Err(DecodeError::SizeMismatch {
                declared,
                actual: payload.len(),
            });
        }

        let mut rest = inflater.into_inner().into_inner();
        let trailing = rest.fill_buf().map_err(DecodeError::Io)?.len();
        if trailing > 0 {
            return Err(DecodeError::TrailingData(trailing));
        }

        parse_payload(&payload)
    }

    /// Reports a missing file as [`DecodeError::NotFound`] rather than a bare I/O error.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, DecodeError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DecodeError::NotFound(path.to_path_buf()),
            _ => DecodeError::Io(e),
        })?;
        Self::from_reader(BufReader::new(file))
    }
}

fn truncated_or_io(e: std::io::Error, context: &'static str) -> DecodeError {
    match e.kind() {
        ErrorKind::UnexpectedEof => DecodeError::Truncated { context },
        _ => DecodeError::Io(e),
    }
}

/// Sequential reader over the inflated payload.
struct PayloadCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> PayloadCursor<'a> {
    fn take(&mut self, len: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or(DecodeError::Truncated { context })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn read_u16(&mut self, context: &'static str) -> Result<u16, DecodeError> {
        let bytes = self.take(2, context)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32(&mut self, context: &'static str) -> Result<u32, DecodeError> {
        let bytes = self.take(4, context)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_string(&mut self, context: &'static str) -> Result<String, DecodeError> {
        let len = self.read_u16(context)? as usize;
        let bytes = self.take(len, context)?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

fn parse_payload(payload: &[u8]) -> Result<LangFile, DecodeError> {
    let mut cursor = PayloadCursor {
        data: payload,
        pos: 0,
    };
    let count = cursor.read_u32("entry count")? as usize;

    // Each entry needs at least four bytes, which bounds the allocation for a corrupt count.
    let mut entries = Vec::with_capacity(count.min(cursor.remaining() / 4));
    for _ in 0..count {
        let key = cursor.read_string("entry key")?;
        let value = cursor.read_string("entry value")?;
        entries.push((key, value));
    }

    match cursor.remaining() {
        0 => Ok(LangFile { entries }),
        n => Err(DecodeError::TrailingData(n)),
    }
}
