//! Runtime configuration for the portfolio app.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::delivery::{JsonlOutbox, LogDelivery, MessageDelivery};
use crate::error::PortfolioResult;
use crate::form::SUBMITTED_RESET_DELAY;
use crate::resume::FileResume;

/// Settings chosen at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// How long the "message sent" acknowledgement stays up
    pub reset_delay: Duration,
    /// JSONL file that receives contact submissions; log only when unset
    pub outbox: Option<PathBuf>,
    /// Resume document offered for download
    pub resume: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reset_delay: SUBMITTED_RESET_DELAY,
            outbox: None,
            resume: None,
        }
    }
}

impl SiteConfig {
    pub fn with_outbox(mut self, path: impl Into<PathBuf>) -> Self {
        self.outbox = Some(path.into());
        self
    }

    pub fn with_resume(mut self, path: impl Into<PathBuf>) -> Self {
        self.resume = Some(path.into());
        self
    }

    /// Build the delivery collaborator for contact submissions.
    pub fn delivery(&self) -> PortfolioResult<Arc<dyn MessageDelivery + Send + Sync>> {
        match &self.outbox {
            Some(path) => Ok(Arc::new(JsonlOutbox::open(path)?)),
            None => Ok(Arc::new(LogDelivery)),
        }
    }

    pub fn resume_source(&self) -> Option<FileResume> {
        self.resume.clone().map(FileResume::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ContactMessage;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.reset_delay, Duration::from_secs(5));
        assert!(config.outbox.is_none());
        assert!(config.resume_source().is_none());
    }

    #[test]
    fn outbox_config_writes_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("outbox.jsonl");
        let config = SiteConfig::default().with_outbox(&path);

        let delivery = config.delivery().unwrap();
        delivery
            .deliver(&ContactMessage::new("a", "a@b", "hi"))
            .unwrap();

        assert_eq!(JsonlOutbox::read_entries(&path).unwrap().len(), 1);
    }
}
