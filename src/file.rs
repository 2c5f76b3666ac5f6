// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::{Error, Result};

/// Write the rendered report as UTF-8, creating parent directories.
/// Returns the absolute path written to.
pub fn write_report(path: &Path, html: &str) -> Result<PathBuf> {
    let io_err = |source| Error::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(io_err)?;
        }
    }
    fs::write(path, html).map_err(io_err)?;
    std::path::absolute(path).map_err(io_err)
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
