//! Polyline interaction engine.
//!
//! Owns the working drawing, the selection, the in-progress polyline and the drag state,
//! and turns pointer and command input into model mutations mirrored onto a
//! [`RenderSurface`]. Every operation is synchronous; bevy systems call into it from the
//! main schedule.

use std::time::Duration;

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::constants::{
    DEFAULT_COLOR, DEFAULT_THICKNESS, DOUBLE_CLICK_DISTANCE, DOUBLE_CLICK_TIME, HIT_TOLERANCE,
};
use crate::drawing::{Drawing, PolylineId, SavedDrawing};

use super::drag::DragState;
use super::geometry::find_nearest_segment_insertion_default;
use super::surface::{RenderSurface, SceneSurface};

/// Sent whenever the selected polyline changes, including to no selection
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChanged {
    pub selected: Option<PolylineId>,
}

/// Interaction engine over a render surface
#[derive(Resource)]
pub struct PolylineEditor<S: RenderSurface> {
    drawing: Drawing,
    selected: Option<PolylineId>,
    is_drawing: bool,
    current_points: Vec<DVec2>,
    drag: DragState,
    /// Timestamp and position of the previous pointer-down
    last_click: Option<(Duration, DVec2)>,
    pending_selection_changes: Vec<SelectionChanged>,
    surface: S,
}

/// The engine used by the app, painted by the canvas
pub type Editor = PolylineEditor<SceneSurface>;

impl<S: RenderSurface + Default> Default for PolylineEditor<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: RenderSurface> PolylineEditor<S> {
    pub fn new(surface: S) -> Self {
        Self {
            drawing: Drawing::default(),
            selected: None,
            is_drawing: false,
            current_points: Vec::new(),
            drag: DragState::None,
            last_click: None,
            pending_selection_changes: Vec::new(),
            surface,
        }
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn selected(&self) -> Option<PolylineId> {
        self.selected
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// Points placed so far for the polyline being drawn
    pub fn current_points(&self) -> &[DVec2] {
        &self.current_points
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Snapshot of the working drawing for saving
    pub fn to_saved(&self) -> SavedDrawing {
        SavedDrawing::from_drawing(&self.drawing)
    }

    /// Drain queued selection notices, oldest first
    pub fn take_selection_changes(&mut self) -> Vec<SelectionChanged> {
        std::mem::take(&mut self.pending_selection_changes)
    }

    /// Enter drawing mode, discarding any polyline in progress and the selection
    pub fn start_new_polyline(&mut self) {
        self.cancel_new_polyline();
        self.drag = DragState::None;
        self.set_selection(None);
        self.is_drawing = true;
        debug!("Started drawing a new polyline");
    }

    pub fn handle_pointer_down(&mut self, point: DVec2, timestamp: Duration) {
        let is_double_click = self.last_click.is_some_and(|(time, position)| {
            timestamp.saturating_sub(time) < DOUBLE_CLICK_TIME
                && point.distance(position) < DOUBLE_CLICK_DISTANCE
        });
        self.last_click = Some((timestamp, point));

        if is_double_click {
            self.handle_double_click(point);
            return;
        }

        if self.drag.is_node_drag() {
            return;
        }

        if self.is_drawing {
            self.current_points.push(point);
            self.surface.show_preview(&self.current_points);
            return;
        }

        // Handles sit on top of the shape, so they are checked first
        let handle_hit = self.surface.hit_test_handle(point);
        if let (Some(index), Some(selected)) = (handle_hit, self.selected)
            && let Some(node) = self
                .drawing
                .get(selected)
                .and_then(|polyline| polyline.points.get(index))
        {
            self.drag = DragState::Node {
                polyline: selected,
                point: index,
                offset: point - *node,
            };
            return;
        }

        if let Some(hit) = self.surface.hit_test_shape(point, HIT_TOLERANCE) {
            if handle_hit.is_some() {
                return;
            }
            if let Some(first) = self
                .drawing
                .get(hit)
                .and_then(|polyline| polyline.points.first())
                .copied()
            {
                self.drag = DragState::Polyline {
                    polyline: hit,
                    offset: point - first,
                };
                self.set_selection(Some(hit));
                return;
            }
        }

        self.set_selection(None);
    }

    pub fn handle_pointer_move(&mut self, point: DVec2, primary_down: bool) {
        if !primary_down {
            return;
        }

        match self.drag {
            DragState::Node {
                polyline,
                point: index,
                offset,
            } => {
                let Some(model) = self.drawing.get_mut(polyline) else {
                    return;
                };
                let Some(node) = model.points.get_mut(index) else {
                    return;
                };
                let new_position = point - offset;
                *node = new_position;

                self.surface.update_shape(model);
                if self.selected == Some(polyline) {
                    self.surface.move_handle(index, new_position);
                }
            }
            DragState::Polyline { polyline, offset } => {
                let Some(model) = self.drawing.get_mut(polyline) else {
                    return;
                };
                let Some(&first) = model.points.first() else {
                    return;
                };
                let delta = (point - offset) - first;
                for p in &mut model.points {
                    *p += delta;
                }

                self.surface.update_shape(model);
                if self.selected == Some(polyline) {
                    for (i, p) in model.points.iter().enumerate() {
                        self.surface.move_handle(i, *p);
                    }
                }
            }
            DragState::None => {
                if self.is_drawing && !self.current_points.is_empty() {
                    // The trailing point follows the pointer but is never committed
                    let mut preview = self.current_points.clone();
                    preview.push(point);
                    self.surface.show_preview(&preview);
                }
            }
        }
    }

    pub fn handle_pointer_up(&mut self, _point: DVec2) {
        self.drag = DragState::None;
    }

    /// Insert a node into the selected polyline at the segment nearest to `point`
    pub fn handle_double_click(&mut self, point: DVec2) {
        let Some(selected) = self.selected else {
            return;
        };
        let Some(model) = self.drawing.get_mut(selected) else {
            return;
        };
        let Some(insertion) = find_nearest_segment_insertion_default(&model.points, point) else {
            return;
        };

        model.points.insert(insertion.index, insertion.point);
        debug!(
            "Inserted node {} into polyline {:?} at {:?}",
            insertion.index, selected, insertion.point
        );
        self.refresh();
    }

    /// Commit the polyline being drawn.
    ///
    /// Returns `false` when not drawing. Fewer than two points ends drawing mode without
    /// adding anything.
    pub fn finish_new_polyline(&mut self, color: &str, thickness: f32) -> bool {
        if !self.is_drawing {
            return false;
        }

        if self.current_points.len() >= 2 {
            let id = self
                .drawing
                .push(self.current_points.clone(), color, thickness);
            info!(
                "Added polyline {:?} with {} points",
                id,
                self.current_points.len()
            );
        } else {
            debug!(
                "Discarded polyline with {} point(s)",
                self.current_points.len()
            );
        }

        self.cancel_new_polyline();
        self.refresh();
        true
    }

    pub fn cancel_new_polyline(&mut self) {
        self.is_drawing = false;
        self.current_points.clear();
        self.surface.clear_preview();
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    pub fn delete_selected(&mut self) {
        let Some(selected) = self.selected else {
            return;
        };

        if self.drawing.remove(selected).is_some() {
            info!("Deleted polyline {:?}", selected);
        }
        self.drag = DragState::None;
        self.set_selection(None);
        self.refresh();
    }

    pub fn delete_all(&mut self) {
        if self.drawing.is_empty() {
            return;
        }

        info!("Deleted all {} polylines", self.drawing.len());
        self.drawing.clear();
        self.drag = DragState::None;
        self.set_selection(None);
        self.refresh();
    }

    /// Replace the working drawing with a copy of `drawing`
    pub fn set_drawing_model(&mut self, drawing: &Drawing) {
        self.drawing = drawing.clone();
        self.drag = DragState::None;
        self.set_selection(None);
        self.refresh();
    }

    pub fn update_selected_color(&mut self, color: &str) {
        let Some(model) = self.selected.and_then(|id| self.drawing.get_mut(id)) else {
            return;
        };
        model.color = color.to_string();
        self.refresh();
    }

    /// Non-finite or non-positive values are ignored
    pub fn update_selected_thickness(&mut self, thickness: f32) {
        if !thickness.is_finite() || thickness <= 0.0 {
            warn!("Ignoring invalid thickness {}", thickness);
            return;
        }
        let Some(model) = self.selected.and_then(|id| self.drawing.get_mut(id)) else {
            return;
        };
        model.thickness = thickness;
        self.refresh();
    }

    /// Color and thickness of the selection, or the defaults without one
    pub fn selected_properties(&self) -> (String, f32) {
        self.selected
            .and_then(|id| self.drawing.get(id))
            .map(|polyline| (polyline.color.clone(), polyline.thickness))
            .unwrap_or_else(|| (DEFAULT_COLOR.to_string(), DEFAULT_THICKNESS))
    }

    fn set_selection(&mut self, selected: Option<PolylineId>) {
        let changed = self.selected != selected;
        self.selected = selected;

        match selected.and_then(|id| self.drawing.get(id)) {
            Some(polyline) => self.surface.show_handles(polyline),
            None => self.surface.clear_handles(),
        }

        if changed {
            self.pending_selection_changes
                .push(SelectionChanged { selected });
        }
    }

    /// Redraw every shape and restore the selection's handles
    fn refresh(&mut self) {
        self.surface.redraw(&self.drawing);
        match self.selected.and_then(|id| self.drawing.get(id)) {
            Some(polyline) => self.surface.show_handles(polyline),
            None => self.surface.clear_handles(),
        }
    }
}

/// Forward queued selection notices as messages
pub fn emit_selection_changes(
    mut editor: ResMut<Editor>,
    mut selection_events: MessageWriter<SelectionChanged>,
) {
    for change in editor.take_selection_changes() {
        selection_events.write(change);
    }
}
