use std::fs::File;
use std::path::Path;

use tempfile::TempDir;
use zip::ZipArchive;

use crate::error::ScanError;

/// True for a regular file named `*.zip` (any case).
pub fn is_zip_archive(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// Unpacks `path` into a fresh temporary directory. The directory is removed
/// when the returned handle is dropped.
pub fn extract_to_temp(path: &Path) -> Result<TempDir, ScanError> {
    let mut archive = ZipArchive::new(File::open(path)?)?;
    let dir = tempfile::Builder::new().prefix("scantime-").tempdir()?;
    log::debug!(
        "Extracting {} entries from {} into {}",
        archive.len(),
        path.display(),
        dir.path().display()
    );
    archive.extract(dir.path())?;
    Ok(dir)
}
