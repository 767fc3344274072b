pub mod file_menu;
mod properties;
mod toolbar;

pub use properties::PropertyPanel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::{ConfigLoaded, ConfigResetNotification, MissingDrawingWarning};
use crate::drawing::{DrawingLoadError, DrawingSaveError};
use crate::editor::{canvas_ui, emit_selection_changes};

/// Resource that tracks whether any modal dialog is currently open.
/// Editor input handlers should check this to avoid processing input
/// when the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block editor input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    missing_drawing: Res<MissingDrawingWarning>,
    config_reset: Res<ConfigResetNotification>,
    save_error: Res<DrawingSaveError>,
    load_error: Res<DrawingLoadError>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = missing_drawing.show
        || config_reset.show
        || save_error.message.is_some()
        || load_error.message.is_some();
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<PropertyPanel>()
            .add_systems(Startup, properties::init_property_panel.after(ConfigLoaded))
            // Top panel must render before the central canvas takes the remaining space
            .add_systems(
                EguiPrimaryContextPass,
                (
                    toolbar::toolbar_ui,
                    canvas_ui,
                    emit_selection_changes,
                    properties::sync_property_panel,
                )
                    .chain(),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    // Last: dialogs/overlays
                    file_menu::load_error_dialog_ui,
                    file_menu::save_error_dialog_ui,
                    file_menu::missing_drawing_warning_ui,
                    file_menu::config_reset_notification_ui,
                )
                    .after(canvas_ui),
            )
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
