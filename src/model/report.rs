use std::fmt;
use std::io::Write;

use serde::Serialize;

use super::duration::Unit;
use super::series_entry::SeriesEntry;
use crate::utils::seconds_to_min_sec;

/// Label of the trailing row carrying the summed scan time.
pub const TOTAL_ROW_LABEL: &str = "TotalScanTime";

/// One output row. Field names are the CSV header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesRow {
    #[serde(rename = "Series")]
    pub series: String,
    #[serde(rename = "SeriesIdentity")]
    pub series_identity: Option<String>,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: Option<String>,
    #[serde(rename = "TagUsed")]
    pub tag_used: Option<String>,
    #[serde(rename = "RawValue")]
    pub raw_value: Option<String>,
    #[serde(rename = "Unit")]
    pub unit: Option<Unit>,
    #[serde(rename = "NumberOfInstances")]
    pub number_of_instances: Option<u64>,
    #[serde(rename = "Seconds")]
    pub seconds: Option<f64>,
    #[serde(rename = "ScanTime")]
    pub scan_time: Option<String>,
}

impl SeriesRow {
    pub fn total(seconds: Option<f64>) -> Self {
        Self {
            series: TOTAL_ROW_LABEL.to_string(),
            series_identity: None,
            manufacturer: None,
            tag_used: None,
            raw_value: None,
            unit: None,
            number_of_instances: None,
            seconds,
            scan_time: seconds.and_then(seconds_to_min_sec),
        }
    }

    pub fn is_total(&self) -> bool {
        self.series == TOTAL_ROW_LABEL && self.number_of_instances.is_none()
    }
}

impl From<SeriesEntry> for SeriesRow {
    fn from(entry: SeriesEntry) -> Self {
        let duration = entry.duration;
        let unit = duration.unit();
        let tag_used = Some(duration.tag_used).filter(|tag| !tag.is_empty());
        Self {
            series: entry.label,
            series_identity: Some(entry.identity),
            manufacturer: Some(entry.manufacturer),
            tag_used,
            raw_value: duration.raw_value,
            unit,
            number_of_instances: Some(entry.instance_count),
            seconds: duration.seconds,
            scan_time: duration.seconds.and_then(seconds_to_min_sec),
        }
    }
}

/// Counters collected over one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub files_checked: u64,
    pub files_dicom: u64,
    pub series_count: u64,
    pub series_with_time: u64,
}

impl fmt::Display for ScanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "files checked: {}, valid DICOM files: {}, series: {}, series with extracted time: {}",
            self.files_checked, self.files_dicom, self.series_count, self.series_with_time
        )
    }
}

/// Per-series rows, always ending with the total row, plus run counters.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub rows: Vec<SeriesRow>,
    pub stats: ScanStats,
}

impl ScanReport {
    /// Rows for real series, without the total.
    pub fn series_rows(&self) -> &[SeriesRow] {
        match self.rows.split_last() {
            Some((last, rest)) if last.is_total() => rest,
            _ => &self.rows,
        }
    }

    pub fn total(&self) -> Option<&SeriesRow> {
        self.rows.last().filter(|row| row.is_total())
    }

    pub fn is_empty(&self) -> bool {
        self.stats.series_count == 0
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}
