//! File dialogs and the error and warning windows around drawing files.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use std::path::PathBuf;

use crate::config::{AppConfig, ConfigResetNotification, MissingDrawingWarning, SaveConfigRequest};
use crate::drawing::persistence::dialog_start_dir;
use crate::drawing::{CurrentDrawingFile, DrawingLoadError, DrawingSaveError};

/// Native "open" dialog for drawing files
pub fn pick_open_path(config: &AppConfig) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Drawing Files", &["json"])
        .set_directory(dialog_start_dir(config))
        .set_title("Open Drawing")
        .pick_file()
}

/// Native "save" dialog for drawing files, adding `.json` when the name has no extension
pub fn pick_save_path(config: &AppConfig) -> Option<PathBuf> {
    let file_name = config
        .data
        .last_drawing_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "drawing.json".to_string());

    rfd::FileDialog::new()
        .add_filter("Drawing Files", &["json"])
        .set_directory(dialog_start_dir(config))
        .set_file_name(file_name)
        .set_title("Save Drawing")
        .save_file()
        .map(with_json_extension)
}

fn with_json_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("json")
    }
}

/// Shorten a path for display, keeping its end
fn display_path(path: &std::path::Path) -> String {
    let path_str = path.to_string_lossy();
    let chars: Vec<char> = path_str.chars().collect();
    if chars.len() > 50 {
        let tail: String = chars[chars.len() - 47..].iter().collect();
        format!("...{}", tail)
    } else {
        path_str.to_string()
    }
}

/// Error window for a failed load
pub fn load_error_dialog_ui(
    mut contexts: EguiContexts,
    mut load_error: ResMut<DrawingLoadError>,
) -> Result {
    let Some(error) = load_error.message.clone() else {
        return Ok(());
    };

    egui::Window::new("Load Error")
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("The drawing could not be opened. The current drawing was kept.");
            ui.add_space(5.0);
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                ui.colored_label(egui::Color32::RED, &error);
            });
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                load_error.message = None;
            }
        });

    Ok(())
}

/// Error window for a failed save
pub fn save_error_dialog_ui(
    mut contexts: EguiContexts,
    mut save_error: ResMut<DrawingSaveError>,
    current_file: Res<CurrentDrawingFile>,
) -> Result {
    let Some(error) = save_error.message.clone() else {
        return Ok(());
    };

    egui::Window::new("Save Error")
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("The drawing could not be saved.");
            if let Some(ref path) = current_file.path {
                ui.label(
                    egui::RichText::new(format!("Last saved to {}", display_path(path))).weak(),
                );
            }
            ui.add_space(5.0);
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                ui.colored_label(egui::Color32::RED, &error);
            });
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                save_error.message = None;
            }
        });

    Ok(())
}

/// Renders the missing drawing warning dialog (shown at startup if last drawing doesn't exist)
pub fn missing_drawing_warning_ui(
    mut contexts: EguiContexts,
    mut warning: ResMut<MissingDrawingWarning>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) -> Result {
    if !warning.show {
        return Ok(());
    }

    egui::Window::new("Drawing Not Found")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("The last opened drawing no longer exists:");

            if let Some(ref path) = warning.path {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(display_path(path)).weak())
                    .on_hover_text(path.to_string_lossy().to_string());
                ui.add_space(10.0);
            }

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    warning.show = false;
                }

                if ui.button("Clear from history").clicked() {
                    config.data.last_drawing_path = None;
                    config.dirty = true;
                    save_events.write(SaveConfigRequest);
                    warning.show = false;
                }
            });
        });

    Ok(())
}

/// Tells the user their config file was unusable and defaults are in effect
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your settings could not be loaded and were reset to defaults.");
            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });

    Ok(())
}
