//! Traits for reading resource documents from any source.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor, Read},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing a resource document from one file, string or reader.
///
/// # Example
///
/// ```rust,no_run
/// use resx2cs::{ResourceDocument, traits::Parser};
/// let document = ResourceDocument::read_from("Properties/Strings.resx")?;
/// println!("{} entries", document.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    ///
    /// The file is decoded BOM-aware, so UTF-16 documents with a byte order
    /// mark are accepted. Any failure to open or read the file is reported as
    /// [`Error::FileUnreadable`].
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::unreadable(path, e))?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .strip_bom(true)
            .build(file);

        let mut bytes = Vec::new();
        decoder
            .read_to_end(&mut bytes)
            .map_err(|e| Error::unreadable(path, e))?;

        Self::from_bytes(&bytes)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(BufReader::new(Cursor::new(bytes)))
    }
}
