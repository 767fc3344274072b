//! Resource types for drawing persistence state tracking.

use bevy::prelude::*;
use std::path::PathBuf;

/// Load failure waiting to be shown to the user
#[derive(Resource, Default)]
pub struct DrawingLoadError {
    pub message: Option<String>,
}

/// Resource tracking save operation errors for display to user.
#[derive(Resource, Default)]
pub struct DrawingSaveError {
    pub message: Option<String>,
}

/// Resource tracking the file the working drawing was last loaded from or saved to
#[derive(Resource, Default)]
pub struct CurrentDrawingFile {
    pub path: Option<PathBuf>,
}

impl CurrentDrawingFile {
    /// File name for display, if the drawing has one
    pub fn display_name(&self) -> Option<String> {
        self.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
    }
}
