//! Drawing save system.

use bevy::prelude::*;
use std::path::Path;

use crate::config::UpdateLastDrawingPathRequest;
use crate::drawing::SavedDrawing;
use crate::editor::Editor;

use super::error::PersistenceError;
use super::helpers::ensure_parent_directory;
use super::messages::SaveDrawingRequest;
use super::resources::{CurrentDrawingFile, DrawingSaveError};

/// Write a drawing as pretty-printed JSON, replacing any existing file
pub fn save_drawing(path: &Path, drawing: &SavedDrawing) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(drawing).map_err(PersistenceError::Serialize)?;

    ensure_parent_directory(path).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, json).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves the working drawing for each request
pub fn save_drawing_system(
    mut events: MessageReader<SaveDrawingRequest>,
    editor: Res<Editor>,
    mut current_file: ResMut<CurrentDrawingFile>,
    mut save_error: ResMut<DrawingSaveError>,
    mut config_events: MessageWriter<UpdateLastDrawingPathRequest>,
) {
    for event in events.read() {
        match save_drawing(&event.path, &editor.to_saved()) {
            Ok(()) => {
                info!(
                    "Drawing with {} polylines saved to {:?}",
                    editor.drawing().len(),
                    event.path
                );
                save_error.message = None;
                current_file.path = Some(event.path.clone());
                config_events.write(UpdateLastDrawingPathRequest {
                    path: event.path.clone(),
                });
            }
            Err(e) => {
                error!("{}", e);
                save_error.message = Some(e.to_string());
            }
        }
    }
}
