//! Cursor icon management for the canvas.

use bevy_egui::egui::CursorIcon;

use super::engine::PolylineEditor;
use super::surface::RenderSurface;

/// Cursor for the canvas given the engine state
pub fn canvas_cursor<S: RenderSurface>(editor: &PolylineEditor<S>) -> CursorIcon {
    if editor.is_drawing() {
        return CursorIcon::Crosshair;
    }
    editor
        .drag_state()
        .cursor_icon()
        .unwrap_or(CursorIcon::Default)
}
