//! Unit tests for the interaction engine.

use std::time::Duration;

use bevy::math::DVec2;

use crate::drawing::{Drawing, PolylineId};

use super::drag::DragState;
use super::engine::{Editor, SelectionChanged};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Editor holding a single polyline, with no pending notices
fn editor_with(points: Vec<DVec2>) -> (Editor, PolylineId) {
    let mut drawing = Drawing::default();
    let id = drawing.push(points, "Black", 2.0);
    let mut editor = Editor::default();
    editor.set_drawing_model(&drawing);
    editor.take_selection_changes();
    (editor, id)
}

/// Click without dragging
fn click(editor: &mut Editor, point: DVec2, at: Duration) {
    editor.handle_pointer_down(point, at);
    editor.handle_pointer_up(point);
}

#[test]
fn test_finish_with_one_point_commits_nothing() {
    let mut editor = Editor::default();
    editor.start_new_polyline();
    click(&mut editor, DVec2::ZERO, ms(0));

    assert!(editor.finish_new_polyline("Red", 3.0));
    assert!(editor.drawing().is_empty());
    assert!(!editor.is_drawing());
    assert!(editor.surface().preview.is_none());
}

#[test]
fn test_finish_appends_matching_record() {
    let mut editor = Editor::default();
    editor.start_new_polyline();
    click(&mut editor, DVec2::ZERO, ms(0));
    click(&mut editor, DVec2::new(5.0, 5.0), ms(1000));
    assert_eq!(editor.current_points().len(), 2);

    assert!(editor.finish_new_polyline("Red", 3.0));

    let polylines = editor.drawing().polylines();
    assert_eq!(polylines.len(), 1);
    assert_eq!(polylines[0].points, vec![DVec2::ZERO, DVec2::new(5.0, 5.0)]);
    assert_eq!(polylines[0].color, "Red");
    assert_eq!(polylines[0].thickness, 3.0);
    assert!(editor.current_points().is_empty());
    assert_eq!(editor.surface().shapes.len(), 1);
}

#[test]
fn test_finish_when_not_drawing_returns_false() {
    let mut editor = Editor::default();
    assert!(!editor.finish_new_polyline("Black", 2.0));
    assert!(editor.drawing().is_empty());
}

#[test]
fn test_cancel_discards_points() {
    let mut editor = Editor::default();
    editor.start_new_polyline();
    click(&mut editor, DVec2::ZERO, ms(0));
    click(&mut editor, DVec2::new(50.0, 0.0), ms(1000));

    editor.cancel_new_polyline();
    assert!(!editor.is_drawing());
    assert!(editor.current_points().is_empty());
    assert!(editor.drawing().is_empty());
    assert!(editor.surface().preview.is_none());
}

#[test]
fn test_preview_trails_pointer_without_committing() {
    let mut editor = Editor::default();
    editor.start_new_polyline();
    click(&mut editor, DVec2::ZERO, ms(0));

    editor.handle_pointer_move(DVec2::new(30.0, 40.0), true);
    assert_eq!(
        editor.surface().preview.as_deref(),
        Some(&[DVec2::ZERO, DVec2::new(30.0, 40.0)][..])
    );
    assert_eq!(editor.current_points(), &[DVec2::ZERO]);

    // Without the button held the preview stays put
    editor.handle_pointer_move(DVec2::new(90.0, 90.0), false);
    assert_eq!(
        editor.surface().preview.as_deref(),
        Some(&[DVec2::ZERO, DVec2::new(30.0, 40.0)][..])
    );
}

#[test]
fn test_start_new_polyline_clears_selection() {
    let (mut editor, id) = editor_with(vec![DVec2::ZERO, DVec2::new(100.0, 0.0)]);
    click(&mut editor, DVec2::new(50.0, 2.0), ms(0));
    assert_eq!(editor.selected(), Some(id));

    editor.start_new_polyline();
    editor.start_new_polyline();
    assert!(editor.is_drawing());
    assert_eq!(editor.selected(), None);
    assert!(editor.surface().handles.is_empty());
}

#[test]
fn test_click_selects_and_shows_handles() {
    let (mut editor, id) = editor_with(vec![
        DVec2::ZERO,
        DVec2::new(100.0, 0.0),
        DVec2::new(100.0, 50.0),
    ]);
    click(&mut editor, DVec2::new(50.0, 6.0), ms(0));

    assert_eq!(editor.selected(), Some(id));
    assert_eq!(editor.surface().handles.len(), 3);
}

#[test]
fn test_click_on_empty_space_clears_selection() {
    let (mut editor, id) = editor_with(vec![DVec2::ZERO, DVec2::new(100.0, 0.0)]);
    click(&mut editor, DVec2::new(50.0, 0.0), ms(0));
    assert_eq!(editor.selected(), Some(id));

    click(&mut editor, DVec2::new(50.0, 200.0), ms(1000));
    assert_eq!(editor.selected(), None);
    assert!(editor.surface().handles.is_empty());
}

#[test]
fn test_whole_polyline_drag() {
    let (mut editor, id) = editor_with(vec![DVec2::ZERO, DVec2::new(10.0, 0.0)]);

    editor.handle_pointer_down(DVec2::new(5.0, 0.0), ms(0));
    assert!(matches!(editor.drag_state(), DragState::Polyline { .. }));

    // Moves points[0] to (5, 5)
    editor.handle_pointer_move(DVec2::new(10.0, 5.0), true);
    editor.handle_pointer_up(DVec2::new(10.0, 5.0));

    let polyline = editor.drawing().get(id).unwrap();
    assert_eq!(polyline.points, vec![DVec2::new(5.0, 5.0), DVec2::new(15.0, 5.0)]);
    assert_eq!(editor.surface().shapes[0].points, polyline.points);
    assert_eq!(editor.surface().handles, polyline.points);
    assert_eq!(editor.drag_state(), DragState::None);
}

#[test]
fn test_node_drag_moves_single_point() {
    let (mut editor, id) = editor_with(vec![
        DVec2::ZERO,
        DVec2::new(10.0, 0.0),
        DVec2::new(10.0, 30.0),
    ]);
    click(&mut editor, DVec2::new(5.0, 0.0), ms(0));

    // Grab the handle of the second node slightly off center
    editor.handle_pointer_down(DVec2::new(10.0, 1.0), ms(1000));
    assert!(editor.drag_state().is_node_drag());

    editor.handle_pointer_move(DVec2::new(20.0, 11.0), true);
    editor.handle_pointer_up(DVec2::new(20.0, 11.0));

    let polyline = editor.drawing().get(id).unwrap();
    assert_eq!(
        polyline.points,
        vec![DVec2::ZERO, DVec2::new(20.0, 10.0), DVec2::new(10.0, 30.0)]
    );
    assert_eq!(editor.surface().handles[1], DVec2::new(20.0, 10.0));
    assert_eq!(editor.selected(), Some(id));
}

#[test]
fn test_move_after_delete_is_noop() {
    let (mut editor, _) = editor_with(vec![DVec2::ZERO, DVec2::new(10.0, 0.0)]);
    editor.handle_pointer_down(DVec2::new(5.0, 0.0), ms(0));
    editor.delete_selected();

    editor.handle_pointer_move(DVec2::new(50.0, 50.0), true);
    assert!(editor.drawing().is_empty());
    assert!(editor.surface().shapes.is_empty());
}

#[test]
fn test_double_click_inserts_node() {
    let (mut editor, id) = editor_with(vec![
        DVec2::ZERO,
        DVec2::new(10.0, 0.0),
        DVec2::new(10.0, 10.0),
    ]);
    click(&mut editor, DVec2::new(5.0, 1.0), ms(0));
    click(&mut editor, DVec2::new(5.0, 2.0), ms(200));

    let polyline = editor.drawing().get(id).unwrap();
    assert_eq!(
        polyline.points,
        vec![DVec2::ZERO, DVec2::new(5.0, 0.0), DVec2::new(10.0, 0.0), DVec2::new(10.0, 10.0)]
    );
    assert_eq!(editor.surface().handles.len(), 4);
}

#[test]
fn test_slow_second_click_is_single_click() {
    let (mut editor, id) = editor_with(vec![DVec2::ZERO, DVec2::new(30.0, 0.0)]);
    click(&mut editor, DVec2::new(15.0, 1.0), ms(0));
    click(&mut editor, DVec2::new(15.0, 1.0), ms(400));

    assert_eq!(editor.drawing().get(id).unwrap().points.len(), 2);
    assert_eq!(editor.selected(), Some(id));
}

#[test]
fn test_distant_second_click_is_single_click() {
    let (mut editor, id) = editor_with(vec![DVec2::ZERO, DVec2::new(40.0, 0.0)]);
    click(&mut editor, DVec2::new(10.0, 0.0), ms(0));
    click(&mut editor, DVec2::new(25.0, 0.0), ms(100));

    assert_eq!(editor.drawing().get(id).unwrap().points.len(), 2);
}

#[test]
fn test_second_click_at_distance_limit_is_single_click() {
    let (mut editor, id) = editor_with(vec![DVec2::ZERO, DVec2::new(40.0, 0.0)]);
    click(&mut editor, DVec2::new(10.0, 0.0), ms(0));
    click(&mut editor, DVec2::new(20.0, 0.0), ms(100));

    assert_eq!(editor.drawing().get(id).unwrap().points.len(), 2);
    assert_eq!(editor.selected(), Some(id));

    // Just inside the limit it is a double-click and inserts a node
    click(&mut editor, DVec2::new(20.0, 9.0), ms(200));
    assert_eq!(
        editor.drawing().get(id).unwrap().points,
        vec![DVec2::ZERO, DVec2::new(20.0, 0.0), DVec2::new(40.0, 0.0)]
    );
}

#[test]
fn test_first_click_is_never_double() {
    let (mut editor, id) = editor_with(vec![DVec2::ZERO, DVec2::new(40.0, 0.0)]);
    editor.handle_pointer_down(DVec2::ZERO, Duration::ZERO);

    assert_eq!(editor.selected(), Some(id));
    assert_eq!(editor.drawing().get(id).unwrap().points.len(), 2);
}

#[test]
fn test_double_click_without_selection_is_noop() {
    let mut editor = Editor::default();
    editor.handle_double_click(DVec2::ZERO);
    assert!(editor.drawing().is_empty());
}

#[test]
fn test_delete_selected_removes_one_record() {
    let mut drawing = Drawing::default();
    let a = drawing.push(vec![DVec2::ZERO, DVec2::new(100.0, 0.0)], "Black", 2.0);
    let b = drawing.push(
        vec![DVec2::new(0.0, 50.0), DVec2::new(100.0, 50.0)],
        "Red",
        2.0,
    );
    let mut editor = Editor::default();
    editor.set_drawing_model(&drawing);

    click(&mut editor, DVec2::new(50.0, 0.0), ms(0));
    editor.delete_selected();

    assert_eq!(editor.drawing().len(), 1);
    assert!(editor.drawing().get(a).is_none());
    assert!(editor.drawing().get(b).is_some());
    assert_eq!(editor.selected(), None);
    assert!(editor.surface().handles.is_empty());
}

#[test]
fn test_delete_without_selection_keeps_model() {
    let (mut editor, _) = editor_with(vec![DVec2::ZERO, DVec2::new(100.0, 0.0)]);
    editor.delete_selected();
    assert_eq!(editor.drawing().len(), 1);
}

#[test]
fn test_delete_all() {
    let (mut editor, _) = editor_with(vec![DVec2::ZERO, DVec2::new(100.0, 0.0)]);
    click(&mut editor, DVec2::new(50.0, 0.0), ms(0));

    editor.delete_all();
    assert!(editor.drawing().is_empty());
    assert_eq!(editor.selected(), None);
    assert!(editor.surface().shapes.is_empty());

    // Empty model stays a no-op
    editor.take_selection_changes();
    editor.delete_all();
    assert!(editor.take_selection_changes().is_empty());
}

#[test]
fn test_set_drawing_model_copies_input() {
    let mut source = Drawing::default();
    let id = source.push(vec![DVec2::ZERO, DVec2::new(10.0, 0.0)], "Blue", 5.0);
    let mut editor = Editor::default();
    editor.set_drawing_model(&source);

    source.get_mut(id).unwrap().points[0] = DVec2::new(99.0, 99.0);
    source.push(vec![DVec2::ONE, DVec2::X], "Red", 1.0);

    assert_eq!(editor.drawing().len(), 1);
    assert_eq!(editor.drawing().get(id).unwrap().points[0], DVec2::ZERO);
    assert_eq!(editor.surface().shapes.len(), 1);
}

#[test]
fn test_update_selected_properties() {
    let (mut editor, id) = editor_with(vec![DVec2::ZERO, DVec2::new(100.0, 0.0)]);

    // Nothing selected yet
    editor.update_selected_color("Red");
    assert_eq!(editor.drawing().get(id).unwrap().color, "Black");
    assert_eq!(editor.selected_properties(), ("Black".to_string(), 2.0));

    click(&mut editor, DVec2::new(50.0, 0.0), ms(0));
    editor.update_selected_color("Red");
    editor.update_selected_thickness(6.0);
    editor.update_selected_thickness(f32::NAN);
    editor.update_selected_thickness(-1.0);

    assert_eq!(editor.selected_properties(), ("Red".to_string(), 6.0));
    assert_eq!(editor.surface().shapes[0].color, "Red");
    assert_eq!(editor.surface().shapes[0].thickness, 6.0);
    assert_eq!(editor.surface().handles.len(), 2);
}

#[test]
fn test_selection_notifications() {
    let (mut editor, id) = editor_with(vec![DVec2::ZERO, DVec2::new(100.0, 0.0)]);

    click(&mut editor, DVec2::new(50.0, 0.0), ms(0));
    assert_eq!(
        editor.take_selection_changes(),
        vec![SelectionChanged { selected: Some(id) }]
    );

    // Re-selecting the same shape does not notify
    click(&mut editor, DVec2::new(60.0, 0.0), ms(1000));
    assert!(editor.take_selection_changes().is_empty());

    click(&mut editor, DVec2::new(60.0, 300.0), ms(2000));
    assert_eq!(
        editor.take_selection_changes(),
        vec![SelectionChanged { selected: None }]
    );

    // Already unselected
    editor.start_new_polyline();
    assert!(editor.take_selection_changes().is_empty());
}

#[test]
fn test_to_saved_matches_drawing() {
    let (editor, _) = editor_with(vec![DVec2::ZERO, DVec2::new(100.0, 0.0)]);
    let saved = editor.to_saved();
    assert_eq!(saved.polylines.len(), 1);
    assert_eq!(saved.polylines[0].points, vec![DVec2::ZERO, DVec2::new(100.0, 0.0)]);
}
