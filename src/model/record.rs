use std::collections::BTreeMap;

use dicom::core::Tag;

/// A single metadata value as it comes out of a record, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Empty,
    Text(String),
    Bytes(Vec<u8>),
    Multi(Vec<FieldValue>),
}

impl FieldValue {
    /// Collapses the value to trimmed text.
    ///
    /// Multi-valued fields yield their first item, byte strings are decoded
    /// (undecodable bytes are dropped) and blank results become `None`.
    pub fn normalized(&self) -> Option<String> {
        match self {
            FieldValue::Empty => None,
            FieldValue::Text(text) => non_blank(text),
            FieldValue::Bytes(bytes) => {
                let decoded = String::from_utf8_lossy(bytes).replace('\u{FFFD}', "");
                non_blank(&decoded)
            }
            FieldValue::Multi(items) => items.first().and_then(FieldValue::normalized),
        }
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        FieldValue::Bytes(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        FieldValue::Multi(values.into_iter().map(FieldValue::from).collect())
    }
}

/// Read-only view of one image instance's metadata, queried by tag.
pub trait MetadataRecord {
    fn field(&self, tag: Tag) -> Option<FieldValue>;

    fn text(&self, tag: Tag) -> Option<String> {
        self.field(tag).as_ref().and_then(FieldValue::normalized)
    }
}

/// Record held entirely in memory, used for synthetic inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRecord {
    fields: BTreeMap<Tag, FieldValue>,
}

impl MemoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, tag: Tag, value: impl Into<FieldValue>) -> Self {
        self.insert(tag, value);
        self
    }

    pub fn insert(&mut self, tag: Tag, value: impl Into<FieldValue>) {
        self.fields.insert(tag, value.into());
    }
}

impl MetadataRecord for MemoryRecord {
    fn field(&self, tag: Tag) -> Option<FieldValue> {
        self.fields.get(&tag).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::dictionary_std::tags;

    #[test]
    fn text_is_trimmed_and_blank_is_absent() {
        let record = MemoryRecord::new()
            .with(tags::MANUFACTURER, "  SIEMENS \0")
            .with(tags::SERIES_DESCRIPTION, "   ");
        assert_eq!(record.text(tags::MANUFACTURER).as_deref(), Some("SIEMENS"));
        assert_eq!(record.text(tags::SERIES_DESCRIPTION), None);
        assert_eq!(record.text(tags::PROTOCOL_NAME), None);
    }

    #[test]
    fn multi_valued_fields_use_the_first_item() {
        let record = MemoryRecord::new().with(tags::ACQUISITION_DURATION, vec!["12.5", "99"]);
        assert_eq!(record.text(tags::ACQUISITION_DURATION).as_deref(), Some("12.5"));

        let empty = FieldValue::Multi(Vec::new());
        assert_eq!(empty.normalized(), None);
    }

    #[test]
    fn byte_strings_are_decoded_and_invalid_bytes_dropped() {
        let mut bytes = b"TA 01:08*2 ".to_vec();
        bytes.push(0xFF);
        bytes.push(0x00);
        let value = FieldValue::from(bytes);
        assert_eq!(value.normalized().as_deref(), Some("TA 01:08*2"));
        assert_eq!(FieldValue::Bytes(b"  ".to_vec()).normalized(), None);
    }
}
