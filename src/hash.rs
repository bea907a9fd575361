//! BLAKE3 hashing utilities for comparing installed files

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{self, Result};

/// Prefix marking a BLAKE3 digest
pub const HASH_PREFIX: &str = "blake3:";

fn prefixed(hash: blake3::Hash) -> String {
    format!("{HASH_PREFIX}{}", hash.to_hex())
}

/// Digest of in-memory content
pub fn hash_bytes(content: &[u8]) -> String {
    prefixed(blake3::hash(content))
}

/// Digest of a file on disk, streamed through the hasher
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| error::fs::read_failed(path, e))?;
    let mut hasher = blake3::Hasher::new();
    hasher
        .update_reader(BufReader::new(file))
        .map_err(|e| error::fs::read_failed(path, e))?;
    Ok(prefixed(hasher.finalize()))
}

/// Whether the file at `path` already holds exactly `content`
///
/// A file that cannot be read is treated as different.
pub fn file_matches(path: &Path, content: &str) -> bool {
    hash_file(path).is_ok_and(|existing| existing == hash_bytes(content.as_bytes()))
}
