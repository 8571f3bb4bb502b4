// src/file.rs

use std::{fs, io, path::Path};

pub fn ensure_directory(p: &Path) -> io::Result<()> {
    fs::create_dir_all(p)
}

/// Write one export file, creating parent directories as needed.
pub fn write_export(path: &Path, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}
