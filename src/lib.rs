//! Per-series scan time extraction from directories of DICOM files.
//!
//! Each file is classified by manufacturer and run through an ordered set of
//! vendor rules that locate and decode the acquisition duration. Instances are
//! grouped by series and summarized into one table with a trailing total.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod scan;
pub mod utils;

pub use config::ScanConfig;
pub use error::{RecordError, ScanError};
pub use extract::{DurationExtractor, TaGrammar};
pub use model::{DurationResult, MetadataRecord, ScanReport, ScanStats, SeriesRow, Unit, Vendor};
pub use scan::{scan, Scanner};
