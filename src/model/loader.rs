use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use dicom::core::header::DataElementHeader;
use dicom::core::value::{PrimitiveValue, Value};
use dicom::core::{DataElement, Tag};
use dicom::dictionary_std::tags;
use dicom::object::file::ReadPreamble;
use dicom::object::{InMemDicomObject, OpenFileOptions};
use dicom::parser::dataset::{DataSetReader, DataToken};
use dicom::transfer_syntax::entries::IMPLICIT_VR_LITTLE_ENDIAN;

use super::record::{FieldValue, MetadataRecord};
use crate::error::RecordError;
use crate::utils::format_tag;

/// Turns a file on disk into a metadata record.
pub trait RecordReader {
    type Record: MetadataRecord;

    fn read(&self, path: &Path) -> Result<Self::Record, RecordError>;
}

/// Permissive DICOM reader.
///
/// Files with a file meta group are read with or without the 128 byte
/// preamble. Files without one are retried as a bare implicit VR little
/// endian data set. Either way reading stops at the Pixel Data header, so
/// the bulk payload is never loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DicomReader;

impl RecordReader for DicomReader {
    type Record = InMemDicomObject;

    fn read(&self, path: &Path) -> Result<InMemDicomObject, RecordError> {
        log::trace!("Reading DICOM file: {}", path.display());
        let options = OpenFileOptions::new()
            .read_preamble(ReadPreamble::Auto)
            .read_until(tags::PIXEL_DATA);

        match options.open_file(path) {
            Ok(object) => Ok(object.into_inner()),
            Err(err) => {
                log::trace!(
                    "{}: no readable file meta group ({err}), retrying as bare data set",
                    path.display()
                );
                read_bare_dataset(path)
            }
        }
    }
}

fn read_bare_dataset(path: &Path) -> Result<InMemDicomObject, RecordError> {
    let file = File::open(path).map_err(|source| RecordError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let transfer_syntax = IMPLICIT_VR_LITTLE_ENDIAN.erased();
    let tokens = DataSetReader::new_with_ts(BufReader::new(file), &transfer_syntax)
        .map_err(|err| parse_error(path, err))?;

    let elements = top_level_elements(tokens, tags::PIXEL_DATA)
        .map_err(|err| parse_error(path, err))?;
    if elements.is_empty() {
        return Err(parse_error(path, "data set has no elements"));
    }
    Ok(InMemDicomObject::from_element_iter(elements))
}

/// Collects the top-level primitive elements of a token stream, stopping at
/// the header of `read_until` so its value is never pulled from the source.
/// Sequence contents are skipped.
fn top_level_elements<I, E>(
    tokens: I,
    read_until: Tag,
) -> Result<Vec<DataElement<InMemDicomObject>>, E>
where
    I: IntoIterator<Item = Result<DataToken, E>>,
{
    let mut elements = Vec::new();
    let mut pending: Option<DataElementHeader> = None;
    let mut depth = 0usize;

    for token in tokens {
        match token? {
            DataToken::ElementHeader(header) if depth == 0 => {
                if let Some(open) = pending.take() {
                    elements.push(DataElement::new(open.tag, open.vr, PrimitiveValue::Empty));
                }
                if header.tag >= read_until {
                    break;
                }
                pending = Some(header);
            }
            DataToken::PrimitiveValue(value) if depth == 0 => {
                if let Some(header) = pending.take() {
                    elements.push(DataElement::new(header.tag, header.vr, value));
                }
            }
            DataToken::PixelSequenceStart if depth == 0 => break,
            DataToken::SequenceStart { .. } | DataToken::PixelSequenceStart => {
                pending = None;
                depth += 1;
            }
            DataToken::SequenceEnd => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    if let Some(open) = pending {
        elements.push(DataElement::new(open.tag, open.vr, PrimitiveValue::Empty));
    }
    Ok(elements)
}

fn parse_error(path: &Path, err: impl Display) -> RecordError {
    RecordError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

impl MetadataRecord for InMemDicomObject {
    fn field(&self, tag: Tag) -> Option<FieldValue> {
        let element = self.element(tag).ok()?;
        match element.value() {
            Value::Primitive(primitive) => Some(primitive_to_field(primitive)),
            Value::Sequence(_) | Value::PixelSequence(_) => Some(FieldValue::Empty),
        }
    }
}

fn primitive_to_field(value: &PrimitiveValue) -> FieldValue {
    match value {
        PrimitiveValue::Empty => FieldValue::Empty,
        PrimitiveValue::Str(text) => FieldValue::Text(text.clone()),
        PrimitiveValue::Strs(items) => {
            FieldValue::Multi(items.iter().cloned().map(FieldValue::Text).collect())
        }
        PrimitiveValue::U8(bytes) => FieldValue::Bytes(bytes.to_vec()),
        PrimitiveValue::I16(values) => displayed(values),
        PrimitiveValue::I32(values) => displayed(values),
        PrimitiveValue::I64(values) => displayed(values),
        PrimitiveValue::U16(values) => displayed(values),
        PrimitiveValue::U32(values) => displayed(values),
        PrimitiveValue::U64(values) => displayed(values),
        // Widened so the text is the exact stored value; Debug keeps the `.0`.
        PrimitiveValue::F32(values) => FieldValue::Multi(
            values
                .iter()
                .map(|v| FieldValue::Text(format!("{:?}", f64::from(*v))))
                .collect(),
        ),
        PrimitiveValue::F64(values) => {
            FieldValue::Multi(values.iter().map(|v| FieldValue::Text(format!("{v:?}"))).collect())
        }
        PrimitiveValue::Tags(values) => FieldValue::Multi(
            values
                .iter()
                .map(|tag| FieldValue::Text(format_tag(*tag)))
                .collect(),
        ),
        PrimitiveValue::Date(_) | PrimitiveValue::Time(_) | PrimitiveValue::DateTime(_) => {
            FieldValue::Text(value.to_str().into_owned())
        }
    }
}

fn displayed<T: Display>(values: &[T]) -> FieldValue {
    FieldValue::Multi(
        values
            .iter()
            .map(|value| FieldValue::Text(value.to_string()))
            .collect(),
    )
}
