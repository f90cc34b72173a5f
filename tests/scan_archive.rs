mod common;

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use common::{fixture_bytes, FixtureReader};
use scantime::{ScanConfig, ScanError, Scanner};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

fn scanner() -> Scanner<FixtureReader> {
    Scanner::with_reader(ScanConfig::default(), FixtureReader).unwrap()
}

fn write_zip(path: &Path, entries: &[(&str, Vec<u8>)]) {
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, bytes) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(bytes).unwrap();
    }
    writer.finish().unwrap();
}

#[test]
fn zip_root_is_unpacked_and_scanned() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("upload.ZIP");
    write_zip(
        &archive,
        &[
            (
                "study/t2/IM0001",
                fixture_bytes(&[
                    ("0008,0070", "SIEMENS"),
                    ("0020,000E", "1.2.1"),
                    ("0008,103E", "t2_tse_tra"),
                    ("0051,100A", "TA 01:08*2"),
                ]),
            ),
            (
                "study/t2/IM0002",
                fixture_bytes(&[
                    ("0008,0070", "SIEMENS"),
                    ("0020,000E", "1.2.1"),
                    ("0008,103E", "t2_tse_tra"),
                ]),
            ),
            (
                "study/ge/IM0001.dcm",
                fixture_bytes(&[
                    ("0008,0070", "GE MEDICAL SYSTEMS"),
                    ("0020,000E", "1.3.1"),
                    ("0008,103E", "Ax FSE"),
                    ("0019,105A", "90500000"),
                ]),
            ),
            ("study/notes.txt", b"TA 01:00".to_vec()),
        ],
    );

    let report = scanner().scan(&archive).unwrap();

    assert_eq!(report.stats.files_checked, 3);
    assert_eq!(report.stats.files_dicom, 3);
    assert_eq!(report.stats.series_count, 2);

    let labels: Vec<_> = report.rows.iter().map(|row| row.series.as_str()).collect();
    assert_eq!(labels, ["Ax FSE", "t2_tse_tra", "TotalScanTime"]);
    assert_eq!(report.rows[1].number_of_instances, Some(2));
    assert_eq!(report.total().unwrap().seconds, Some(90.5 + 136.0));
}

#[test]
fn corrupt_zip_root_fails_the_scan() {
    let dir = TempDir::new().unwrap();
    let archive = dir.path().join("upload.zip");
    fs::write(&archive, b"definitely not a zip archive").unwrap();

    assert!(matches!(
        scanner().scan(&archive),
        Err(ScanError::Archive(_))
    ));
}

#[test]
fn non_zip_file_root_is_still_rejected() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("upload.tar");
    fs::write(&file, b"").unwrap();

    assert!(matches!(
        scanner().scan(&file),
        Err(ScanError::NotADirectory(_))
    ));
}
