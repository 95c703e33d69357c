//! Resume download source.

use std::path::{Path, PathBuf};

use crate::error::{PortfolioError, PortfolioResult};

/// Supplies the resume document offered by the "Download Resume" button.
pub trait ResumeSource {
    fn fetch(&self) -> PortfolioResult<Vec<u8>>;

    /// Suggested file name for saving
    fn file_name(&self) -> String {
        "resume.pdf".to_string()
    }
}

/// Resume read from a file on disk.
#[derive(Clone, Debug)]
pub struct FileResume {
    path: PathBuf,
}

impl FileResume {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResumeSource for FileResume {
    fn fetch(&self) -> PortfolioResult<Vec<u8>> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| PortfolioError::Resume(format!("{}: {}", self.path.display(), e)))?;
        if bytes.is_empty() {
            return Err(PortfolioError::Resume(format!(
                "{} is empty",
                self.path.display()
            )));
        }
        Ok(bytes)
    }

    fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("resume.pdf")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_file_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("eras-resume.pdf");
        std::fs::write(&path, b"%PDF-1.7").unwrap();

        let resume = FileResume::new(&path);
        assert_eq!(resume.fetch().unwrap(), b"%PDF-1.7");
        assert_eq!(resume.file_name(), "eras-resume.pdf");
    }

    #[test]
    fn missing_file_is_resume_error() {
        let resume = FileResume::new("/nonexistent/resume.pdf");
        assert!(matches!(resume.fetch(), Err(PortfolioError::Resume(_))));
    }

    #[test]
    fn empty_file_is_resume_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("resume.pdf");
        std::fs::write(&path, b"").unwrap();

        assert!(matches!(
            FileResume::new(&path).fetch(),
            Err(PortfolioError::Resume(_))
        ));
    }
}
