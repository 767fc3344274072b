use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::config::AppConfig;
use crate::drawing::{CurrentDrawingFile, LoadDrawingRequest, SaveDrawingRequest};
use crate::editor::Editor;
use crate::theme;

use super::file_menu::{pick_open_path, pick_save_path};
use super::properties::{PropertyPanel, property_controls};

fn toolbar_button(ui: &mut egui::Ui, label: &str, shortcut: &str, enabled: bool) -> bool {
    let button = egui::Button::new(egui::RichText::new(label).size(14.0).strong())
        .min_size(egui::vec2(0.0, 28.0));
    ui.add_enabled(enabled, button)
        .on_hover_text(shortcut)
        .clicked()
}

/// One-line summary of what the editor is doing
fn status_text(editor: &Editor, current_file: &CurrentDrawingFile) -> String {
    if editor.is_drawing() {
        let count = editor.current_points().len();
        return format!(
            "Drawing: {} point{} (Enter to finish, Esc to cancel)",
            count,
            if count == 1 { "" } else { "s" }
        );
    }

    if let Some(polyline) = editor.selected().and_then(|id| editor.drawing().get(id)) {
        return format!(
            "Selected: {} points, {} {:.1}px",
            polyline.points.len(),
            polyline.color,
            polyline.thickness
        );
    }

    let file = current_file
        .display_name()
        .unwrap_or_else(|| "Untitled".to_string());
    format!("{} ({} polylines)", file, editor.drawing().len())
}

/// Main toolbar: drawing commands, file commands, property controls and status
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut editor: ResMut<Editor>,
    mut panel: ResMut<PropertyPanel>,
    config: Res<AppConfig>,
    current_file: Res<CurrentDrawingFile>,
    mut save_events: MessageWriter<SaveDrawingRequest>,
    mut load_events: MessageWriter<LoadDrawingRequest>,
) -> Result {
    egui::TopBottomPanel::top("main_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                let drawing = editor.is_drawing();
                let has_selection = editor.selected().is_some();

                if toolbar_button(ui, "New Polyline", "N", true) {
                    editor.start_new_polyline();
                }
                if toolbar_button(ui, "Finish", "Enter / Space / Right click", drawing) {
                    editor.finish_new_polyline(&panel.color, panel.thickness);
                }
                if toolbar_button(ui, "Cancel", "Esc", drawing) {
                    editor.cancel_new_polyline();
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if toolbar_button(ui, "Delete", "Del", has_selection) {
                    editor.delete_selected();
                }
                let has_polylines = !editor.drawing().is_empty();
                if toolbar_button(ui, "Delete All", "Remove every polyline", has_polylines) {
                    editor.delete_all();
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if toolbar_button(ui, "Open", "Ctrl+O", true)
                    && let Some(path) = pick_open_path(&config)
                {
                    load_events.write(LoadDrawingRequest { path });
                }
                if toolbar_button(ui, "Save", "Ctrl+S", true) {
                    if editor.is_drawing() {
                        editor.finish_new_polyline(&panel.color, panel.thickness);
                    }
                    if let Some(path) = pick_save_path(&config) {
                        save_events.write(SaveDrawingRequest { path });
                    }
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                property_controls(ui, &mut panel, &mut editor);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(status_text(&editor, &current_file))
                            .color(theme::STATUS_TEXT),
                    );
                });
            });
        });
    Ok(())
}
