#![allow(dead_code)]

use std::fs;
use std::path::Path;

use dicom::core::Tag;
use scantime::model::{MemoryRecord, RecordReader};
use scantime::RecordError;

/// Reads fixture files: a 128 byte preamble, `DICM`, then `gggg,eeee=value`
/// lines. Anything else is rejected.
pub struct FixtureReader;

impl RecordReader for FixtureReader {
    type Record = MemoryRecord;

    fn read(&self, path: &Path) -> Result<MemoryRecord, RecordError> {
        let bytes = fs::read(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reject = |message: &str| RecordError::Parse {
            path: path.to_path_buf(),
            message: message.to_string(),
        };
        if bytes.get(128..132) != Some(b"DICM".as_slice()) {
            return Err(reject("no marker"));
        }
        let body = String::from_utf8(bytes[132..].to_vec()).map_err(|_| reject("not utf-8"))?;

        let mut record = MemoryRecord::new();
        for line in body.lines().filter(|line| !line.trim().is_empty()) {
            let (tag, value) = line.split_once('=').ok_or_else(|| reject("bad line"))?;
            let (group, element) = tag.split_once(',').ok_or_else(|| reject("bad tag"))?;
            let group = u16::from_str_radix(group, 16).map_err(|_| reject("bad group"))?;
            let element = u16::from_str_radix(element, 16).map_err(|_| reject("bad element"))?;
            record.insert(Tag(group, element), value);
        }
        Ok(record)
    }
}

pub fn fixture_bytes(fields: &[(&str, &str)]) -> Vec<u8> {
    let mut bytes = vec![0u8; 128];
    bytes.extend_from_slice(b"DICM");
    for (tag, value) in fields {
        bytes.extend_from_slice(format!("{tag}={value}\n").as_bytes());
    }
    bytes
}

pub fn write_fixture(root: &Path, relative: &str, fields: &[(&str, &str)]) {
    write_raw(root, relative, &fixture_bytes(fields));
}

pub fn write_raw(root: &Path, relative: &str, bytes: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}
