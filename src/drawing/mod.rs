mod model;
pub mod persistence;
mod saved;

pub use model::{Drawing, Polyline, PolylineId};
pub use persistence::{
    CurrentDrawingFile, DrawingLoadError, DrawingSaveError, LoadDrawingRequest,
    SaveDrawingRequest,
};
pub use saved::SavedDrawing;

use bevy::prelude::*;

pub struct DrawingPlugin;

impl Plugin for DrawingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DrawingLoadError>()
            .init_resource::<DrawingSaveError>()
            .init_resource::<CurrentDrawingFile>()
            .add_message::<SaveDrawingRequest>()
            .add_message::<LoadDrawingRequest>()
            .add_systems(Startup, persistence::ensure_drawings_directory)
            .add_systems(
                Update,
                (
                    persistence::save_drawing_system.run_if(on_message::<SaveDrawingRequest>),
                    persistence::load_drawing_system.run_if(on_message::<LoadDrawingRequest>),
                ),
            );
    }
}
