use std::path::{Path, PathBuf};

use remap_ir::MappingRequest;

use crate::{Error, Result};

/// A mapping config file with both raw content and validated requests.
#[derive(Debug)]
pub struct ConfigFile {
    path: PathBuf,
    content: String,
    requests: Vec<MappingRequest>,
}

impl ConfigFile {
    /// Open and validate a mapping config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content =
            std::fs::read_to_string(&path).map_err(|e| Error::io(path.clone(), e))?;
        let filename = path.display().to_string();
        let requests = crate::validate::validate(&content, &filename)?;

        Ok(Self {
            path,
            content,
            requests,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the validated, deduplicated requests in config order.
    pub fn requests(&self) -> &[MappingRequest] {
        &self.requests
    }

    /// Consume the file, keeping only the requests.
    pub fn into_requests(self) -> Vec<MappingRequest> {
        self.requests
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const CONFIG: &str = r#"[{"source":"a.ts","target":"b.ts","viceVersa":true}]"#;

    #[test]
    fn test_open_reads_and_validates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mapping.json");
        fs::write(&path, CONFIG).unwrap();

        let config = ConfigFile::open(&path).unwrap();

        assert_eq!(config.path(), path);
        assert_eq!(config.content(), CONFIG);
        assert_eq!(config.requests().len(), 1);
        assert!(config.requests()[0].bidirectional);
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = ConfigFile::open(temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_parse_file_yields_requests() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mapping.json");
        fs::write(&path, CONFIG).unwrap();

        let requests = crate::parse_file(&path).unwrap();
        assert_eq!(requests, vec![MappingRequest::new("a.ts", "b.ts").bidirectional()]);
    }
}
