//! Error types for catalog operations

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by load, search, edit and save
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("XML file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("XML file contains errors (at byte {position}): {message}")]
    Parse { position: usize, message: String },

    #[error("No item selected.")]
    Selection,

    #[error("Item `{0}` not found in XML.")]
    Lookup(String),

    #[error("Could not access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No XML file loaded. Please load a file first.")]
    NoDocument,
}

impl CatalogError {
    /// Wrap an I/O failure on `path`, mapping a missing file to `NotFound`
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let err = CatalogError::from_io(
            "items.xml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, CatalogError::NotFound(ref p) if p == &PathBuf::from("items.xml")));
    }

    #[test]
    fn test_other_io_failure_keeps_source() {
        let err = CatalogError::from_io(
            "out.xml",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("out.xml"));
    }
}
