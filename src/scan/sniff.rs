use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::model::RecordReader;

const PREAMBLE_LEN: usize = 128;
const MAGIC: &[u8; 4] = b"DICM";

/// Whether `path` looks like a DICOM file.
///
/// A `DICM` marker after the 128 byte preamble is accepted outright.
/// Anything else, including a failed header read, gets a full parse attempt
/// through `reader`.
pub fn is_dicom_file<R: RecordReader + ?Sized>(path: &Path, reader: &R) -> bool {
    match has_magic(path) {
        Ok(true) => return true,
        Ok(false) => {}
        Err(err) => log::trace!("{}: header check failed ({err})", path.display()),
    }

    match reader.read(path) {
        Ok(_) => true,
        Err(err) => {
            log::trace!("{err}");
            false
        }
    }
}

fn has_magic(path: &Path) -> io::Result<bool> {
    let mut header = Vec::with_capacity(PREAMBLE_LEN + MAGIC.len());
    File::open(path)?
        .take((PREAMBLE_LEN + MAGIC.len()) as u64)
        .read_to_end(&mut header)?;
    Ok(header.get(PREAMBLE_LEN..) == Some(MAGIC.as_slice()))
}
