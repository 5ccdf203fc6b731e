use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use hydrogen_common::warning::clear_warnings;
use hydrogen_dom::Forest;
use thiserror::Error;

use crate::{Tokenizer, TreeBuilder};

/// Error type for document loading.
///
/// Only acquiring the input can fail. Once the text is in memory parsing
/// always produces a (possibly partial) forest.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to open or read a file
    #[error("failed to read '{}'", path.display())]
    File {
        /// The path that was requested.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Failed to read from a stream
    #[error("failed to read input stream")]
    Stream {
        /// The underlying I/O error.
        #[from]
        source: io::Error,
    },
}

/// Parse markup that is already in memory.
#[must_use]
pub fn parse_str(html: &str) -> Forest {
    clear_warnings();
    TreeBuilder::new(Tokenizer::new(html.to_string())).run()
}

/// Read `reader` to the end and parse it.
///
/// Bytes are taken as UTF-8; invalid sequences are replaced rather than
/// rejected.
///
/// # Errors
///
/// Returns [`LoadError::Stream`] if reading fails. Nothing is parsed in that
/// case.
pub fn parse_reader(mut reader: impl Read) -> Result<Forest, LoadError> {
    let text = read_text(&mut reader)?;
    clear_warnings();
    Ok(TreeBuilder::new(Tokenizer::new(text)).run())
}

/// Open the file at `path` and parse it.
///
/// # Errors
///
/// Returns [`LoadError::File`] if the file cannot be opened or read.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Forest, LoadError> {
    let text = read_file(path)?;
    clear_warnings();
    Ok(TreeBuilder::new(Tokenizer::new(text)).run())
}

/// Read the whole file at `path` as text, for callers that drive the
/// [`Tokenizer`] or [`TreeBuilder`] themselves.
///
/// # Errors
///
/// Returns [`LoadError::File`] if the file cannot be opened or read.
pub fn read_file(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let file_error = |source| LoadError::File {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(file_error)?;
    read_text(&mut file).map_err(file_error)
}

fn read_text(reader: &mut impl Read) -> io::Result<String> {
    let mut bytes = Vec::new();
    let _ = reader.read_to_end(&mut bytes)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
