//! Drawing canvas: paints the scene surface and feeds pointer input to the engine.
//!
//! The canvas fills the central egui panel. Positions handed to the engine are relative
//! to the panel's top-left corner, y pointing down.

use bevy::math::DVec2;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::constants::{PREVIEW_DASH_LENGTH, PREVIEW_GAP_LENGTH};
use crate::theme;
use crate::ui::{DialogState, PropertyPanel};

use super::cursor::canvas_cursor;
use super::engine::Editor;
use super::surface::SceneSurface;

/// Central canvas panel
pub fn canvas_ui(
    mut contexts: EguiContexts,
    mut editor: ResMut<Editor>,
    panel: Res<PropertyPanel>,
    dialog_state: Res<DialogState>,
    time: Res<Time>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(theme::CANVAS_BACKGROUND))
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let origin = response.rect.min;

            if !dialog_state.any_modal_open {
                handle_pointer(ui, &response, origin, &mut editor, &panel, &time);
            }

            if response.contains_pointer() {
                ui.ctx().set_cursor_icon(canvas_cursor(&*editor));
            }

            paint_scene(&painter, origin, editor.surface());
        });
    Ok(())
}

fn handle_pointer(
    ui: &egui::Ui,
    response: &egui::Response,
    origin: egui::Pos2,
    editor: &mut Editor,
    panel: &PropertyPanel,
    time: &Time,
) {
    let (pos, primary_pressed, primary_down, primary_released, secondary_pressed, moving) =
        ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.secondary_pressed(),
                i.pointer.is_moving(),
            )
        });

    let Some(pos) = pos else {
        return;
    };
    let point = DVec2::new(f64::from(pos.x - origin.x), f64::from(pos.y - origin.y));
    let over_canvas = response.contains_pointer();

    if primary_pressed && over_canvas {
        editor.handle_pointer_down(point, time.elapsed());
    }

    if secondary_pressed && over_canvas && editor.is_drawing() {
        editor.finish_new_polyline(&panel.color, panel.thickness);
    }

    if moving && (over_canvas || editor.drag_state().is_dragging()) {
        editor.handle_pointer_move(point, primary_down);
    }

    if primary_released {
        editor.handle_pointer_up(point);
    }
}

/// Canvas coordinates are kept in f64 and only narrowed here, for painting
fn to_screen(origin: egui::Pos2, point: DVec2) -> egui::Pos2 {
    let point = point.as_vec2();
    origin + egui::vec2(point.x, point.y)
}

fn paint_scene(painter: &egui::Painter, origin: egui::Pos2, scene: &SceneSurface) {
    for shape in &scene.shapes {
        let points: Vec<egui::Pos2> = shape.points.iter().map(|p| to_screen(origin, *p)).collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(shape.thickness, theme::polyline_color(&shape.color)),
        ));
    }

    if let Some(preview) = &scene.preview {
        let points: Vec<egui::Pos2> = preview.iter().map(|p| to_screen(origin, *p)).collect();
        painter.extend(egui::Shape::dashed_line(
            &points,
            egui::Stroke::new(theme::PREVIEW_STROKE_WIDTH, theme::PREVIEW_COLOR),
            PREVIEW_DASH_LENGTH,
            PREVIEW_GAP_LENGTH,
        ));
    }

    for handle in &scene.handles {
        let (min, max) = SceneSurface::handle_bounds(*handle);
        let rect = egui::Rect::from_min_max(to_screen(origin, min), to_screen(origin, max));
        painter.rect_filled(rect, 0.0, theme::HANDLE_FILL);
        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(1.0, theme::HANDLE_STROKE),
            egui::StrokeKind::Inside,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_offsets_by_origin() {
        let origin = egui::pos2(100.0, 40.0);
        assert_eq!(to_screen(origin, DVec2::new(5.0, 6.0)), egui::pos2(105.0, 46.0));
    }
}
