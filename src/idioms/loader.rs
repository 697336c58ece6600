//! Dictionary loading utilities
//!
//! Decompresses a gzip idiom list and folds it into an `IdiomGraph`.

use super::DICTIONARY_GZ;
use crate::solver::IdiomGraph;
use flate2::read::GzDecoder;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a dictionary
#[derive(Debug, Error)]
pub enum IdiomError {
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decompress dictionary: {0}")]
    Decompress(#[source] io::Error),
    #[error("dictionary is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Build a graph from gzip-compressed dictionary bytes
///
/// Surrounding whitespace is trimmed before the text is split into lines.
///
/// # Errors
///
/// Returns `IdiomError::Decompress` if the bytes are not a valid gzip
/// stream and `IdiomError::Encoding` if the content is not UTF-8.
pub fn from_compressed(bytes: &[u8]) -> Result<IdiomGraph, IdiomError> {
    let mut decoded = Vec::new();
    GzDecoder::new(bytes)
        .read_to_end(&mut decoded)
        .map_err(IdiomError::Decompress)?;

    let text = String::from_utf8(decoded)?;
    let graph = IdiomGraph::from_lines(text.trim().lines());

    tracing::debug!(
        symbols = graph.len(),
        edges = graph.edge_count(),
        "loaded idiom graph"
    );

    Ok(graph)
}

/// Load a gzip-compressed dictionary from a file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be
/// decompressed.
///
/// # Examples
/// ```no_run
/// use jukugo_chain::idioms::loader::load_from_file;
///
/// let graph = load_from_file("data/idioms.txt.gz").unwrap();
/// println!("Loaded {} characters", graph.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<IdiomGraph, IdiomError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| IdiomError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    from_compressed(&bytes)
}

/// Load the dictionary compiled into the binary
///
/// # Errors
///
/// Returns an error if the embedded stream is corrupt.
pub fn load_embedded() -> Result<IdiomGraph, IdiomError> {
    from_compressed(DICTIONARY_GZ)
}
