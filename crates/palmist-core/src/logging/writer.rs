//! Append-only JSONL file writer.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::entry::JsonLogEntry;

/// Appends entries to `logs/<date>_palmist.jsonl`.
pub struct LogFileWriter {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl LogFileWriter {
    /// Open today's log file under `logs_dir`, creating the directory.
    pub fn new(logs_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = logs_dir.join(format!("{}_palmist.jsonl", date));

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry as a single line and flush.
    pub fn write(&self, entry: &JsonLogEntry) -> std::io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }
}

impl Drop for LogFileWriter {
    fn drop(&mut self) {
        let _ = self.writer.lock().flush();
    }
}

/// Read every entry back from a log file, skipping unparseable lines.
pub fn read_entries(path: impl AsRef<Path>) -> std::io::Result<Vec<JsonLogEntry>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter_map(|line| JsonLogEntry::from_json_line(line).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_and_read_back() {
        let temp = TempDir::new().unwrap();
        let writer = LogFileWriter::new(temp.path().join("logs")).unwrap();

        writer.write(&JsonLogEntry::new("info", "t", "one")).unwrap();
        writer.write(&JsonLogEntry::new("warn", "t", "two")).unwrap();

        let entries = read_entries(writer.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].msg, "two");
        assert!(writer
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .ends_with("_palmist.jsonl"));
    }

    #[test]
    fn test_garbage_lines_skipped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mixed.jsonl");
        let good = JsonLogEntry::new("info", "t", "ok").to_json_line().unwrap();
        fs::write(&path, format!("not json\n{}\n", good)).unwrap();

        let entries = read_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].msg, "ok");
    }
}
