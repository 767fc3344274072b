//! Drawing load system.

use bevy::prelude::*;
use std::path::Path;

use crate::config::UpdateLastDrawingPathRequest;
use crate::drawing::SavedDrawing;
use crate::editor::Editor;

use super::error::PersistenceError;
use super::messages::LoadDrawingRequest;
use super::resources::{CurrentDrawingFile, DrawingLoadError};

/// Read a drawing file.
///
/// A file that does not exist yet reads as an empty drawing.
pub fn load_drawing(path: &Path) -> Result<SavedDrawing, PersistenceError> {
    if !path.exists() {
        debug!("No drawing at {:?}, starting empty", path);
        return Ok(SavedDrawing::default());
    }

    let json = std::fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&json).map_err(|source| PersistenceError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces the working drawing for each request.
///
/// On failure the working drawing is left untouched.
pub fn load_drawing_system(
    mut events: MessageReader<LoadDrawingRequest>,
    mut editor: ResMut<Editor>,
    mut current_file: ResMut<CurrentDrawingFile>,
    mut load_error: ResMut<DrawingLoadError>,
    mut config_events: MessageWriter<UpdateLastDrawingPathRequest>,
) {
    for event in events.read() {
        let saved = match load_drawing(&event.path) {
            Ok(saved) => saved,
            Err(e) => {
                error!("{}", e);
                load_error.message = Some(e.to_string());
                continue;
            }
        };

        load_error.message = None;
        let drawing = saved.into_drawing();
        info!(
            "Loaded drawing with {} polylines from {:?}",
            drawing.len(),
            event.path
        );

        editor.cancel_new_polyline();
        editor.set_drawing_model(&drawing);
        current_file.path = Some(event.path.clone());
        config_events.write(UpdateLastDrawingPathRequest {
            path: event.path.clone(),
        });
    }
}
