use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory of log files, removed on drop.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, bytes).unwrap();
        path
    }

    pub fn write_plain(&self, name: &str, text: &str) -> PathBuf {
        self.write_bytes(name, text.as_bytes())
    }

    /// One gzip member per element of `parts`, concatenated.
    pub fn write_gzip_members(&self, name: &str, parts: &[&str]) -> PathBuf {
        let bytes: Vec<u8> = parts.iter().flat_map(|part| gzip(part.as_bytes())).collect();
        self.write_bytes(name, &bytes)
    }

    pub fn write_gzip(&self, name: &str, text: &str) -> PathBuf {
        self.write_gzip_members(name, &[text])
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

/// `count` dated lines, one every `step` seconds from 2021-06-01 00:00:00,
/// alternating `GET` and `POST` requests.
pub fn access_log(count: usize, step: i64) -> String {
    let base = chrono::NaiveDate::from_ymd_opt(2021, 6, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (0..count)
        .map(|i| {
            let ts = base + chrono::Duration::seconds(step * i as i64);
            let method = if i % 2 == 0 { "GET" } else { "POST" };
            format!("{} {method} /item/{i} 200\n", ts.format("%Y-%m-%d %H:%M:%S"))
        })
        .collect()
}
