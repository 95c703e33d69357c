//! Where contact form submissions go.
//!
//! The page has no mail backend. [`LogDelivery`] records the submission in
//! the log and nothing else; [`JsonlOutbox`] also appends it to a local
//! JSONL file so messages survive the session.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::form::ContactMessage;

/// Takes a validated contact message off the form's hands.
pub trait MessageDelivery {
    fn deliver(&self, message: &ContactMessage) -> PortfolioResult<()>;
}

/// Logs the submission and drops it.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDelivery;

impl MessageDelivery for LogDelivery {
    fn deliver(&self, message: &ContactMessage) -> PortfolioResult<()> {
        tracing::info!(
            name = %message.name,
            email = %message.email,
            length = message.message.len(),
            "Message received (not forwarded)"
        );
        Ok(())
    }
}

/// One line of the outbox file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboxEntry {
    /// ISO 8601 timestamp (e.g., "2026-10-19T14:30:45.123Z")
    pub ts: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl OutboxEntry {
    /// Stamp a message with the current time.
    pub fn new(message: &ContactMessage) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            name: message.name.clone(),
            email: message.email.clone(),
            message: message.message.clone(),
        }
    }

    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Appends each submission to a JSONL file.
pub struct JsonlOutbox {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlOutbox {
    /// Open (or create) the outbox file, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every entry back, skipping lines that do not parse.
    pub fn read_entries(path: impl AsRef<Path>) -> PortfolioResult<Vec<OutboxEntry>> {
        let file = File::open(path)?;
        let mut entries = Vec::new();

        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match OutboxEntry::from_json_line(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!(error = %e, "Skipping malformed outbox line"),
            }
        }

        Ok(entries)
    }
}

impl MessageDelivery for JsonlOutbox {
    fn deliver(&self, message: &ContactMessage) -> PortfolioResult<()> {
        let line = OutboxEntry::new(message).to_json_line()?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)
            .and_then(|_| writer.flush())
            .map_err(|e| PortfolioError::Delivery(format!("{}: {}", self.path.display(), e)))?;

        tracing::info!(path = %self.path.display(), "Message written to outbox");
        Ok(())
    }
}

impl Drop for JsonlOutbox {
    fn drop(&mut self) {
        let _ = self.writer.lock().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn outbox_appends_one_line_per_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("outbox.jsonl");
        let outbox = JsonlOutbox::open(&path).unwrap();

        outbox
            .deliver(&ContactMessage::new("Ayesha", "ayesha@example.com", "Need a logo"))
            .unwrap();
        outbox
            .deliver(&ContactMessage::new("Bilal", "bilal@example.com", "T-shirt set"))
            .unwrap();

        let entries = JsonlOutbox::read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Ayesha");
        assert_eq!(entries[1].message, "T-shirt set");
        assert!(entries[0].ts.ends_with('Z'));
    }

    #[test]
    fn outbox_reopen_appends() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("outbox.jsonl");

        {
            let outbox = JsonlOutbox::open(&path).unwrap();
            outbox.deliver(&ContactMessage::new("a", "a@b", "one")).unwrap();
        }
        {
            let outbox = JsonlOutbox::open(&path).unwrap();
            outbox.deliver(&ContactMessage::new("b", "b@c", "two")).unwrap();
        }

        let entries = JsonlOutbox::read_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn read_skips_garbage_lines() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("outbox.jsonl");
        let good = OutboxEntry::new(&ContactMessage::new("a", "a@b", "hi"))
            .to_json_line()
            .unwrap();
        fs::write(&path, format!("not json\n\n{}\n", good)).unwrap();

        let entries = JsonlOutbox::read_entries(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].email, "a@b");
    }

    #[test]
    fn log_delivery_always_succeeds() {
        assert!(LogDelivery
            .deliver(&ContactMessage::new("a", "a@b", "hi"))
            .is_ok());
    }
}
