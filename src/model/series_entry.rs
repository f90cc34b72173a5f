use dicom::dictionary_std::tags;

use super::duration::DurationResult;
use super::record::MetadataRecord;

/// Grouping key used when a record has neither a series nor a study UID.
pub const UNKNOWN_IDENTITY: &str = "unknown";

/// Accumulated state for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub label: String,
    pub identity: String,
    pub manufacturer: String,
    pub instance_count: u64,
    pub duration: DurationResult,
}

impl SeriesEntry {
    /// Starts an entry from the first record seen for `identity`, with no
    /// instances counted yet.
    pub fn from_record<R: MetadataRecord + ?Sized>(identity: String, record: &R) -> Self {
        Self {
            label: series_label(record),
            identity,
            manufacturer: record.text(tags::MANUFACTURER).unwrap_or_default(),
            instance_count: 0,
            duration: DurationResult::none(),
        }
    }

    pub fn has_duration(&self) -> bool {
        self.duration.is_found()
    }
}

/// SeriesInstanceUID, falling back to StudyInstanceUID, then `"unknown"`.
pub fn series_identity<R: MetadataRecord + ?Sized>(record: &R) -> String {
    record
        .text(tags::SERIES_INSTANCE_UID)
        .or_else(|| record.text(tags::STUDY_INSTANCE_UID))
        .unwrap_or_else(|| UNKNOWN_IDENTITY.to_string())
}

/// SeriesDescription, else `Series <number>`, else `Unknown Series`.
pub fn series_label<R: MetadataRecord + ?Sized>(record: &R) -> String {
    if let Some(description) = record.text(tags::SERIES_DESCRIPTION) {
        return description;
    }
    match record.text(tags::SERIES_NUMBER) {
        Some(number) => format!("Series {number}"),
        None => "Unknown Series".to_string(),
    }
}
