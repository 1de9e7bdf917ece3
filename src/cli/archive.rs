use crate::error::{ListcloneError, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::path::Path;

/// Pack a directory tree into a gzip-compressed tar archive.
///
/// The archive's single top-level entry is `source_dir`'s base name, so
/// extraction reproduces a directory named after the source rather than its
/// full path. An existing file at `archive_path` is overwritten. Symlinks are
/// stored as symlink entries, not followed; Unix permissions and mtimes are
/// recorded as found on disk.
///
/// A mid-write failure can leave a partial file at `archive_path`.
pub fn create_archive(source_dir: &Path, archive_path: &Path) -> Result<()> {
    if !source_dir.is_dir() {
        return Err(ListcloneError::NotADirectory(source_dir.to_path_buf()));
    }
    // Paths like "/" or "." carry no usable entry name
    let root_name = source_dir
        .file_name()
        .ok_or_else(|| ListcloneError::NotADirectory(source_dir.to_path_buf()))?;

    let output = File::create(archive_path)?;
    let encoder = GzEncoder::new(output, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder.follow_symlinks(false);

    builder.append_dir_all(root_name, source_dir)?;

    // Flush the tar trailer, then the gzip trailer
    let encoder = builder.into_inner()?;
    encoder.finish()?;
    Ok(())
}
