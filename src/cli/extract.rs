use crate::error::{ListcloneError, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Unpack a gzip-compressed tar archive into `dest_dir`, recreating the
/// recorded tree including the archive's top-level directory name.
///
/// `dest_dir` is created if absent. Existing files at colliding relative
/// paths are overwritten. There is no rollback on failure; entries unpacked
/// before the error remain on disk.
pub fn extract_archive(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    let input = File::open(archive_path)?;
    std::fs::create_dir_all(dest_dir)?;

    let mut archive = tar::Archive::new(GzDecoder::new(input));
    // Decode failures: flate2 reports a corrupt gzip stream as InvalidInput
    // or InvalidData, tar reports unparseable headers as Other. Destination
    // write errors keep their own kinds (NotFound, PermissionDenied, ...)
    // and stay plain IO errors.
    archive.unpack(dest_dir).map_err(|e| match e.kind() {
        ErrorKind::InvalidInput | ErrorKind::InvalidData | ErrorKind::UnexpectedEof
        | ErrorKind::Other => {
            ListcloneError::MalformedArchive(format!("{}: {}", archive_path.display(), e))
        }
        _ => ListcloneError::Io(e),
    })?;

    Ok(())
}
