// history.rs

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::error::HistoryWarning;

/// How many entries `format_recent` shows by default.
pub const DEFAULT_SHOW_LIMIT: usize = 10;

/// In-memory calculation log mirrored into a plain-text backing file,
/// one entry per line. The file is append-only except for `clear`.
pub struct History {
    path: PathBuf,
    entries: Vec<String>,
}

impl History {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Populates the log from the backing file, keeping file order and
    /// skipping blank lines. A missing file just leaves the log empty;
    /// a read failure leaves it empty and reports the warning.
    pub fn load(&mut self) -> Result<(), HistoryWarning> {
        if !self.path.exists() {
            return Ok(());
        }
        let file = File::open(&self.path).map_err(|source| HistoryWarning::Load {
            path: self.path.clone(),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut loaded = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| HistoryWarning::Load {
                path: self.path.clone(),
                source,
            })?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                loaded.push(trimmed.to_string());
            }
        }
        // A failed read leaves the log empty rather than half-populated.
        self.entries = loaded;
        Ok(())
    }

    /// Appends to the log, then mirrors the entry into the backing file.
    /// On a write failure the entry stays in memory; memory and file
    /// diverge until the next successful write or clear.
    pub fn append(&mut self, entry: String) -> Result<(), HistoryWarning> {
        let line = entry.clone();
        self.entries.push(entry);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{}", line));
        result.map_err(|source| HistoryWarning::Save {
            path: self.path.clone(),
            source,
        })
    }

    /// Renders the last `min(limit, len)` entries in chronological order,
    /// numbered from 1, with a note when older entries are omitted.
    pub fn format_recent(&self, limit: usize) -> String {
        if self.entries.is_empty() {
            return "History is empty.".to_string();
        }
        let total = self.entries.len();
        let start = total.saturating_sub(limit);
        let mut out = self.entries[start..]
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{:>2}. {}", i + 1, entry))
            .join("\n");
        if total > limit {
            out.push_str(&format!("\n... showing last {} of {} entries", limit, total));
        }
        out
    }

    /// Empties the log and truncates the backing file. Truncation failure
    /// leaves the file as-is but the in-memory log is cleared regardless.
    pub fn clear(&mut self) -> Result<(), HistoryWarning> {
        self.entries.clear();
        File::create(&self.path)
            .map(|_| ())
            .map_err(|source| HistoryWarning::Clear {
                path: self.path.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn temp_history(dir: &tempfile::TempDir) -> History {
        History::new(dir.path().join("history.txt"))
    }

    #[test]
    fn load_missing_file_leaves_log_empty() {
        let dir = tempdir().unwrap();
        let mut history = temp_history(&dir);
        history.load().unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn load_skips_blank_lines_and_keeps_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.txt");
        std::fs::write(
            &path,
            "[10:00:00] 1.0 + 1.0 = 2.0\n\n   \n[10:00:01] 2.0 * 3.0 = 6.0\n",
        )
        .unwrap();
        let mut history = History::new(&path);
        history.load().unwrap();
        assert_eq!(
            history.entries(),
            [
                "[10:00:00] 1.0 + 1.0 = 2.0".to_string(),
                "[10:00:01] 2.0 * 3.0 = 6.0".to_string(),
            ]
        );
    }

    #[test]
    fn append_round_trips_through_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.txt");
        let mut history = History::new(&path);
        history
            .append("[12:34:56] 10.0 + 5.0 = 15.0".to_string())
            .unwrap();

        let mut reloaded = History::new(&path);
        reloaded.load().unwrap();
        assert_eq!(
            reloaded.entries(),
            ["[12:34:56] 10.0 + 5.0 = 15.0".to_string()]
        );
    }

    #[test]
    fn append_keeps_entry_in_memory_when_write_fails() {
        let dir = tempdir().unwrap();
        // A directory at the backing path makes the append-open fail.
        let path = dir.path().join("history.txt");
        std::fs::create_dir(&path).unwrap();
        let mut history = History::new(&path);
        let warning = history.append("[12:00:00] 1.0 + 1.0 = 2.0".to_string());
        assert!(matches!(warning, Err(HistoryWarning::Save { .. })));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn clear_empties_log_and_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.txt");
        let mut history = History::new(&path);
        history
            .append("[12:00:00] 1.0 + 1.0 = 2.0".to_string())
            .unwrap();
        history.clear().unwrap();
        assert!(history.is_empty());

        let mut reloaded = History::new(&path);
        reloaded.load().unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn format_recent_reports_empty_log() {
        let dir = tempdir().unwrap();
        let history = temp_history(&dir);
        assert_eq!(
            history.format_recent(DEFAULT_SHOW_LIMIT),
            "History is empty."
        );
    }

    #[test]
    fn format_recent_shows_last_ten_of_fifteen() {
        let dir = tempdir().unwrap();
        let mut history = temp_history(&dir);
        for i in 1..=15 {
            history
                .append(format!("[00:00:{:02}] {}.0 + 0.0 = {}.0", i, i, i))
                .unwrap();
        }
        let shown = history.format_recent(DEFAULT_SHOW_LIMIT);
        let lines: Vec<&str> = shown.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with(" 1."));
        assert!(lines[0].ends_with("[00:00:06] 6.0 + 0.0 = 6.0"));
        assert!(lines[9].starts_with("10."));
        assert!(lines[9].ends_with("[00:00:15] 15.0 + 0.0 = 15.0"));
        assert_eq!(lines[10], "... showing last 10 of 15 entries");
    }

    #[test]
    fn format_recent_without_overflow_has_no_omission_note() {
        let dir = tempdir().unwrap();
        let mut history = temp_history(&dir);
        history
            .append("[00:00:01] 1.0 + 1.0 = 2.0".to_string())
            .unwrap();
        assert_eq!(
            history.format_recent(DEFAULT_SHOW_LIMIT),
            " 1. [00:00:01] 1.0 + 1.0 = 2.0"
        );
    }
}
