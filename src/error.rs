use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn one file into a record. Never fatal to a scan.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("{}: failed to open file ({source})", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: not a readable DICOM data set ({message})", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Run-level failure. A scan that returns one of these produced no results.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("scan root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("unable to read archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("unable to read scan root: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid duration pattern: {0}")]
    Pattern(#[from] regex::Error),
}
