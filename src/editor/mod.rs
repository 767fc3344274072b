mod camera;
mod canvas;
mod cursor;
mod drag;
mod engine;
mod geometry;
mod shortcuts;
mod surface;

#[cfg(test)]
mod tests;

pub use canvas::canvas_ui;
pub use engine::{Editor, PolylineEditor, SelectionChanged, emit_selection_changes};
pub use surface::RenderSurface;

use bevy::prelude::*;

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Editor>()
            .add_message::<SelectionChanged>()
            .add_systems(Startup, camera::spawn_camera)
            .add_systems(
                Update,
                (
                    shortcuts::handle_drawing_shortcuts,
                    shortcuts::handle_file_shortcuts,
                ),
            );
    }
}
