//! Append-only daily JSONL file.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::LogEntry;

/// Appends [`LogEntry`] lines to `<logs_dir>/raw/<YYYY-MM-DD>_<instance>.jsonl`.
pub struct DailyLogFile {
    instance: String,
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl DailyLogFile {
    /// Open (or create) today's file for `instance`.
    pub fn open(logs_dir: impl AsRef<Path>, instance: impl Into<String>) -> std::io::Result<Self> {
        let instance = instance.into();
        let raw_dir = logs_dir.as_ref().join("raw");
        fs::create_dir_all(&raw_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = raw_dir.join(format!("{}_{}.jsonl", date, instance));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            instance,
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry and flush, so a crash loses at most the current line.
    pub fn append(&self, entry: &LogEntry) -> std::io::Result<()> {
        let line = entry
            .to_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

impl Drop for DailyLogFile {
    fn drop(&mut self) {
        let _ = self.writer.lock().flush();
    }
}
