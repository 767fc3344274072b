//! Drag state of the interaction engine.

use bevy::math::DVec2;
use bevy_egui::egui::CursorIcon;

use crate::drawing::PolylineId;

/// What the primary button is currently dragging.
///
/// Targets are stored by id and point index; both are rechecked against the drawing on
/// every move, so a drag whose polyline or point disappeared does nothing.
#[derive(Default, Clone, Copy, PartialEq, Debug)]
pub enum DragState {
    #[default]
    None,
    /// A single node of a polyline
    Node {
        polyline: PolylineId,
        point: usize,
        /// Pointer position minus the node position at drag start
        offset: DVec2,
    },
    /// A whole polyline, anchored on its first point
    Polyline {
        polyline: PolylineId,
        /// Pointer position minus the first point at drag start
        offset: DVec2,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::None)
    }

    pub fn is_node_drag(&self) -> bool {
        matches!(self, DragState::Node { .. })
    }

    /// Cursor shown while this drag is active
    pub fn cursor_icon(&self) -> Option<CursorIcon> {
        match self {
            DragState::None => None,
            DragState::Node { .. } => Some(CursorIcon::Grab),
            DragState::Polyline { .. } => Some(CursorIcon::Move),
        }
    }
}
