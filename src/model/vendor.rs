use std::fmt;

use dicom::dictionary_std::tags;

use super::record::MetadataRecord;

const UNKNOWN_VENDOR: &str = "Unknown";

/// Scanner manufacturer category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Vendor {
    Siemens,
    Philips,
    /// Canon Medical, including scanners still branded Toshiba.
    Canon,
    Ge,
    /// Anything else, carrying the trimmed manufacturer string.
    Unknown(String),
}

/// Substring matchers in priority order. `ge` goes last since it shows up
/// inside plenty of unrelated names.
const MATCHERS: [(&str, Vendor); 5] = [
    ("siemens", Vendor::Siemens),
    ("philips", Vendor::Philips),
    ("canon", Vendor::Canon),
    ("toshiba", Vendor::Canon),
    ("ge", Vendor::Ge),
];

impl Vendor {
    pub fn classify(manufacturer: &str) -> Self {
        let raw = manufacturer.trim();
        let lowered = raw.to_lowercase();
        MATCHERS
            .iter()
            .find(|(needle, _)| lowered.contains(*needle))
            .map(|(_, vendor)| vendor.clone())
            .unwrap_or_else(|| {
                if raw.is_empty() {
                    Vendor::Unknown(UNKNOWN_VENDOR.to_string())
                } else {
                    Vendor::Unknown(raw.to_string())
                }
            })
    }

    /// Classifies a record by its Manufacturer (0008,0070) field.
    pub fn detect<R: MetadataRecord + ?Sized>(record: &R) -> Self {
        Self::classify(&record.text(tags::MANUFACTURER).unwrap_or_default())
    }

    pub fn name(&self) -> &str {
        match self {
            Vendor::Siemens => "Siemens",
            Vendor::Philips => "Philips",
            Vendor::Canon => "Canon",
            Vendor::Ge => "GE",
            Vendor::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
