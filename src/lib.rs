//! Listclone - file hashing and directory archiving
//!
//! A thin command-line wrapper around two concerns:
//!
//! - **Hashing**: streaming SHA-256 over a file's bytes, rendered as a
//!   64-character lowercase hex digest.
//! - **Archiving**: packing a directory tree into a single gzip-compressed
//!   tar archive and unpacking such an archive back into a directory.
//!
//! Archives use the source directory's base name as their single top-level
//! entry, so extracting into `dest/` reproduces `dest/<basename>/...`. The
//! conventional `.lcone` extension is cosmetic only; the byte format is plain
//! `.tar.gz`.
//!
//! ## Example
//!
//! ```no_run
//! use listclone::cli::{create_archive, extract_archive, hash_file};
//! use std::path::Path;
//!
//! let digest = hash_file(Path::new("notes.txt")).unwrap();
//! println!("{digest}");
//!
//! create_archive(Path::new("project"), Path::new("project.lcone")).unwrap();
//! extract_archive(Path::new("project.lcone"), Path::new("restored")).unwrap();
//! // restored/project/... now mirrors project/...
//! ```

pub mod cli;
pub mod error;

pub use cli::{create_archive, extract_archive, hash_file};
pub use error::{ListcloneError, Result};
