//! Marker file access.
//!
//! Each function opens, uses and closes its file before returning.
//! Writes truncate the target in place; there is no backup of the old value.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{DevTag, ReleaseTag};
use crate::error::{Result, TagError};

/// On-disk shape of the dev marker (`version: dev.N`)
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DevMarker {
    #[serde(default)]
    pub version: String,
}

/// Reads the raw version string out of the dev marker.
///
/// A document without a `version` key yields an empty string, which the
/// dev tag parser then rejects.
pub fn read_dev_marker(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|e| TagError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "read dev marker");

    // An empty file is an empty document, not a YAML error.
    if contents.trim().is_empty() {
        return Ok(String::new());
    }

    let marker: DevMarker = serde_yaml::from_str(&contents)?;
    Ok(marker.version)
}

/// Renders the dev marker document for `tag`.
pub fn render_dev_marker(tag: &DevTag) -> Result<String> {
    let marker = DevMarker {
        version: tag.to_string(),
    };
    Ok(serde_yaml::to_string(&marker)?)
}

/// Writes `tag` into the dev marker and returns the rendered document.
pub fn write_dev_marker(path: &Path, tag: &DevTag) -> Result<String> {
    let document = render_dev_marker(tag)?;
    fs::write(path, &document).map_err(|e| TagError::io(path, e))?;
    tracing::debug!(path = %path.display(), version = %tag, "wrote dev marker");
    Ok(document)
}

/// Writes `tag` into the new-version marker as a bare string.
pub fn write_release_marker(path: &Path, tag: &ReleaseTag) -> Result<()> {
    fs::write(path, tag.to_string()).map_err(|e| TagError::io(path, e))?;
    tracing::debug!(path = %path.display(), version = %tag, "wrote release marker");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_dev_marker() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("DEV_BUILD_VERSION.yaml");

        let document = write_dev_marker(&path, &DevTag::new(7)).unwrap();
        assert_eq!(document, "version: dev.7\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "version: dev.7\n");

        let raw = read_dev_marker(&path).unwrap();
        assert_eq!(DevTag::parse(&raw).unwrap().build, 7);
    }

    #[test]
    fn test_read_quoted_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dev.yaml");
        fs::write(&path, "version: \"dev.12\"\n").unwrap();
        assert_eq!(read_dev_marker(&path).unwrap(), "dev.12");
    }

    #[test]
    fn test_read_missing_version_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dev.yaml");
        fs::write(&path, "other: value\n").unwrap();
        assert_eq!(read_dev_marker(&path).unwrap(), "");
    }

    #[test]
    fn test_read_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dev.yaml");
        fs::write(&path, "").unwrap();
        assert_eq!(read_dev_marker(&path).unwrap(), "");
    }

    #[test]
    fn test_read_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dev.yaml");
        fs::write(&path, "version: [unclosed\n").unwrap();
        let err = read_dev_marker(&path).unwrap_err();
        assert!(matches!(err, TagError::Marker(_)));
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = read_dev_marker(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, TagError::Io { .. }));
    }

    #[test]
    fn test_write_release_marker_raw() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("NEW_BUILD_VERSION");
        fs::write(&path, "0.0.0-old-and-longer").unwrap();

        write_release_marker(&path, &ReleaseTag::new("1", 3, "0")).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1.3.0");
    }

    #[test]
    fn test_write_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("NEW_BUILD_VERSION");
        let err = write_release_marker(&path, &ReleaseTag::new("1", 0, "0")).unwrap_err();
        assert!(matches!(err, TagError::Io { .. }));
    }
}
