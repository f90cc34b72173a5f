use std::path::PathBuf;

use clap::Parser;

use crate::config::ScanConfig;

#[derive(Parser, Debug)]
#[command(name = "scantime")]
#[command(version)]
#[command(about = "Summarize per-series scan time from a folder of DICOM files", long_about = None)]
pub struct Cli {
    /// Directory to scan recursively, or a .zip archive to unpack and scan
    pub root: PathBuf,

    /// Write the CSV table to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File extensions to skip without reading (replaces the default list)
    #[arg(long = "skip-ext", value_delimiter = ',')]
    pub skip_ext: Vec<String>,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_links: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn scan_config(&self) -> ScanConfig {
        let config = ScanConfig::default().with_follow_links(self.follow_links);
        if self.skip_ext.is_empty() {
            config
        } else {
            config.with_skip_extensions(&self.skip_ext)
        }
    }
}
