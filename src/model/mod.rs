pub mod duration;
pub mod loader;
pub mod record;
pub mod report;
pub mod series_entry;
pub mod vendor;

pub use duration::{DurationResult, Unit};
pub use loader::{DicomReader, RecordReader};
pub use record::{FieldValue, MemoryRecord, MetadataRecord};
pub use report::{ScanReport, ScanStats, SeriesRow, TOTAL_ROW_LABEL};
pub use series_entry::{series_identity, series_label, SeriesEntry, UNKNOWN_IDENTITY};
pub use vendor::Vendor;
