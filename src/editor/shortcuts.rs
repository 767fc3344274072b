//! Keyboard shortcuts for drawing and file operations.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::config::AppConfig;
use crate::drawing::{LoadDrawingRequest, SaveDrawingRequest};
use crate::ui::file_menu::{pick_open_path, pick_save_path};
use crate::ui::{DialogState, PropertyPanel};

use super::engine::Editor;

fn ctrl_held(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.pressed(KeyCode::ControlLeft)
        || keyboard.pressed(KeyCode::ControlRight)
        || keyboard.pressed(KeyCode::SuperLeft)
        || keyboard.pressed(KeyCode::SuperRight)
}

/// Enter/Space finish, Escape cancels, N starts a polyline, Delete removes the selection
pub fn handle_drawing_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut editor: ResMut<Editor>,
    panel: Res<PropertyPanel>,
    dialog_state: Res<DialogState>,
    mut contexts: EguiContexts,
) {
    // Don't trigger if typing in UI
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }
    if dialog_state.any_modal_open || ctrl_held(&keyboard) {
        return;
    }

    if editor.is_drawing() && keyboard.any_just_pressed([KeyCode::Enter, KeyCode::Space]) {
        editor.finish_new_polyline(&panel.color, panel.thickness);
        return;
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        if editor.is_drawing() {
            editor.cancel_new_polyline();
        } else if editor.selected().is_some() {
            editor.clear_selection();
        }
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyN) {
        editor.start_new_polyline();
        return;
    }

    if keyboard.just_pressed(KeyCode::Delete) && editor.selected().is_some() {
        editor.delete_selected();
    }
}

/// Ctrl+S saves and Ctrl+O opens through the native file dialogs
#[allow(clippy::too_many_arguments)]
pub fn handle_file_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut editor: ResMut<Editor>,
    panel: Res<PropertyPanel>,
    config: Res<AppConfig>,
    dialog_state: Res<DialogState>,
    mut save_events: MessageWriter<SaveDrawingRequest>,
    mut load_events: MessageWriter<LoadDrawingRequest>,
    mut contexts: EguiContexts,
) {
    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_keyboard_input()
    {
        return;
    }
    if dialog_state.any_modal_open || !ctrl_held(&keyboard) {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyS) {
        // Commit the polyline in progress so it is part of the saved file
        if editor.is_drawing() {
            editor.finish_new_polyline(&panel.color, panel.thickness);
        }
        if let Some(path) = pick_save_path(&config) {
            save_events.write(SaveDrawingRequest { path });
        }
    } else if keyboard.just_pressed(KeyCode::KeyO)
        && let Some(path) = pick_open_path(&config)
    {
        load_events.write(LoadDrawingRequest { path });
    }
}
