//! Append-only trace file with size-based rotation.
//!
//! When the file grows past the policy limit it is renamed to
//! `<stem>.json.<unix-seconds>` and a fresh file is started. Only the newest
//! backups are kept.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// When to rotate and how many rotated files to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    pub max_bytes: u64,
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10MB per file, three backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe line writer shared by the plugin and worker exporters.
///
/// The file is opened lazily on the first write, so constructing a writer for
/// a path that does not exist yet always succeeds.
pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    writer: Mutex<Option<fs::File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Fails if rotation, opening or writing fails, or if the lock is poisoned.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| std::io::Error::other(format!("Mutex poisoned: {e}")))?;

        self.rotate_if_full(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| std::io::Error::other("No file available"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate_if_full(&self, writer: &mut Option<fs::File>) -> std::io::Result<()> {
        let Ok(metadata) = fs::metadata(&self.file_path) else {
            return Ok(());
        };
        if metadata.len() <= self.policy.max_bytes {
            return Ok(());
        }

        *writer = None;

        let timestamp = chrono::Utc::now().timestamp_millis();
        let backup_path = self.file_path.with_extension(format!("json.{timestamp}"));
        fs::rename(&self.file_path, backup_path)?;

        self.prune_backups()
    }

    /// Deletes all but the newest `max_backups` rotated files.
    ///
    /// Individual delete failures are ignored.
    fn prune_backups(&self) -> std::io::Result<()> {
        let parent = self
            .file_path
            .parent()
            .ok_or_else(|| std::io::Error::other("No parent directory"))?;
        let prefix = self
            .file_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| format!("{name}."))
            .ok_or_else(|| std::io::Error::other("Invalid file name"))?;

        let mut backups: Vec<(String, PathBuf)> = fs::read_dir(parent)?
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().to_str()?.to_string();
                name.starts_with(&prefix).then(|| (name, entry.path()))
            })
            .collect();

        // Suffixes are millisecond timestamps of equal width, so names sort by age.
        backups.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, old) in backups.iter().skip(self.policy.max_backups) {
            let _ = fs::remove_file(old);
        }

        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
