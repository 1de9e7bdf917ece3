use crate::error::Result;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read granularity for streaming hashes. Any chunk size yields the same
/// digest; 4096 matches the page size on most targets.
const CHUNK_SIZE: usize = 4096;

/// Compute the SHA-256 digest of a file, reading it in fixed-size chunks.
/// Returns the digest as 64 lowercase hex characters.
///
/// Fails with the underlying IO error if the path is missing, unreadable,
/// or not a regular file.
pub fn hash_file(path: &Path) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut chunk = [0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        hasher.update(&chunk[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
