//! Native file choosers restricted to XML files

use std::path::{Path, PathBuf};

use crate::core::file_system::{display_name, ensure_xml_extension, XML_EXTENSION};

fn xml_dialog() -> rfd::FileDialog {
    rfd::FileDialog::new().add_filter("XML files", &[XML_EXTENSION])
}

/// Ask for a catalog to load; `None` when cancelled
pub fn pick_xml_file(start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = xml_dialog();
    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_file()
}

/// Ask where to save, suggesting the current file; `None` when cancelled
pub fn pick_save_path(current: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = xml_dialog();
    if let Some(path) = current {
        if let Some(dir) = path.parent() {
            dialog = dialog.set_directory(dir);
        }
        dialog = dialog.set_file_name(display_name(path));
    }
    dialog.save_file().map(ensure_xml_extension)
}
