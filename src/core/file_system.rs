//! Path helpers for catalog files

use std::path::{Path, PathBuf};

/// Extension used by catalog files
pub const XML_EXTENSION: &str = "xml";

/// Check if this path names an XML file
pub fn is_xml_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(XML_EXTENSION))
        .unwrap_or(false)
}

/// Append `.xml` when the chosen save path has no extension
pub fn ensure_xml_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(XML_EXTENSION)
    }
}

/// Short name for menus and titles
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Recent files that still exist on disk
pub fn existing_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    paths.iter().filter(|p| p.is_file()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_xml_file() {
        assert!(is_xml_file(Path::new("items.xml")));
        assert!(is_xml_file(Path::new("ITEMS.XML")));
        assert!(!is_xml_file(Path::new("items.json")));
        assert!(!is_xml_file(Path::new("items")));
    }

    #[test]
    fn test_ensure_xml_extension() {
        assert_eq!(ensure_xml_extension(PathBuf::from("out")), PathBuf::from("out.xml"));
        assert_eq!(ensure_xml_extension(PathBuf::from("out.xml")), PathBuf::from("out.xml"));
        assert_eq!(ensure_xml_extension(PathBuf::from("out.bak")), PathBuf::from("out.bak"));
    }

    #[test]
    fn test_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("a.xml");
        std::fs::write(&present, "<items/>").unwrap();
        let missing = dir.path().join("b.xml");

        assert_eq!(existing_files(&[present.clone(), missing]), vec![present]);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/tmp/items.xml")), "items.xml");
    }
}
