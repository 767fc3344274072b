//! Helper functions for drawing persistence.

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::paths;

/// Create the directory a file will be written into, if it is missing
pub fn ensure_parent_directory(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            std::fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}

pub fn ensure_drawings_directory() {
    let drawings_dir = paths::drawings_dir();
    if !drawings_dir.exists()
        && let Err(e) = std::fs::create_dir_all(&drawings_dir)
    {
        warn!("Failed to create drawings directory: {}", e);
    }
}

/// Directory file dialogs start in: next to the last drawing, or the drawings folder
pub fn dialog_start_dir(config: &AppConfig) -> PathBuf {
    config
        .data
        .last_drawing_path
        .as_deref()
        .and_then(Path::parent)
        .filter(|dir| dir.is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(paths::drawings_dir)
}
