//! Directory scanning: walk, filter, sniff, read, aggregate.

pub mod aggregator;
pub mod archive;
pub mod sniff;

pub use aggregator::SeriesAggregator;
pub use sniff::is_dicom_file;

use std::path::Path;

use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::extract::{DurationExtractor, TaGrammar};
use crate::model::{DicomReader, RecordReader, ScanReport};

pub struct Scanner<R = DicomReader> {
    config: ScanConfig,
    reader: R,
    extractor: DurationExtractor,
}

impl Scanner<DicomReader> {
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        Self::with_reader(config, DicomReader)
    }
}

impl<R: RecordReader> Scanner<R> {
    pub fn with_reader(config: ScanConfig, reader: R) -> Result<Self, ScanError> {
        Ok(Self {
            config,
            reader,
            extractor: DurationExtractor::new(TaGrammar::new()?),
        })
    }

    /// Scans every file below `root`, in file name order. A `.zip` root is
    /// unpacked into a temporary directory first.
    ///
    /// Files that are skipped, unrecognized or unreadable are left out of the
    /// report. Only problems with `root` itself fail the scan.
    pub fn scan(&self, root: &Path) -> Result<ScanReport, ScanError> {
        if archive::is_zip_archive(root) {
            log::info!("Unpacking archive {}", root.display());
            let extracted = archive::extract_to_temp(root)?;
            return self.scan_directory(extracted.path());
        }
        self.scan_directory(root)
    }

    fn scan_directory(&self, root: &Path) -> Result<ScanReport, ScanError> {
        log::info!("Scanning {} for DICOM series", root.display());

        if !root.exists() {
            return Err(ScanError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        let walker = WalkDir::new(root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name();

        let mut aggregator = SeriesAggregator::new(&self.extractor);
        let mut files_checked = 0u64;
        let mut files_dicom = 0u64;

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(ScanError::Walk(err)),
                Err(err) => {
                    log::warn!("Error walking directory: {err}");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if self.config.is_skipped(path) {
                log::trace!("Skipping by extension: {}", path.display());
                continue;
            }
            if !is_dicom_file(path, &self.reader) {
                log::debug!("Not a DICOM file: {}", path.display());
                continue;
            }

            files_checked += 1;
            let record = match self.reader.read(path) {
                Ok(record) => record,
                Err(err) => {
                    log::debug!("Skipping unreadable file: {err}");
                    continue;
                }
            };
            files_dicom += 1;
            aggregator.observe(&record);
        }

        let report = aggregator.finish(files_checked, files_dicom);
        log::info!("Scan of {} finished: {}", root.display(), report.stats);
        Ok(report)
    }
}

/// Scans `root` with the default configuration and DICOM reader.
pub fn scan(root: &Path) -> Result<ScanReport, ScanError> {
    Scanner::new(ScanConfig::default())?.scan(root)
}
