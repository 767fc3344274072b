//! Color and thickness controls, kept in sync with the selected polyline.

use bevy::prelude::*;
use bevy_egui::egui;

use crate::config::{AppConfig, AppConfigData};
use crate::constants::{DEFAULT_COLOR, MAX_THICKNESS, MIN_THICKNESS};
use crate::editor::{Editor, PolylineEditor, RenderSurface, SelectionChanged};

/// State of the property controls.
///
/// With a selection the controls show and edit its style. Without one they hold the
/// style the next polyline is drawn with.
#[derive(Resource, Debug, Clone)]
pub struct PropertyPanel {
    pub enabled: bool,
    pub color: String,
    pub thickness: f32,
    /// Colors offered by the combo box, first entry is the fallback
    pub palette: Vec<String>,
    default_color: String,
    default_thickness: f32,
}

impl Default for PropertyPanel {
    fn default() -> Self {
        Self::from_config(&AppConfigData::default())
    }
}

impl PropertyPanel {
    pub fn from_config(config: &AppConfigData) -> Self {
        let palette = if config.palette.is_empty() {
            vec![DEFAULT_COLOR.to_string()]
        } else {
            config.palette.clone()
        };
        Self {
            enabled: false,
            color: config.default_color.clone(),
            thickness: config.default_thickness,
            palette,
            default_color: config.default_color.clone(),
            default_thickness: config.default_thickness,
        }
    }

    fn fallback_color(&self) -> String {
        self.palette
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_COLOR.to_string())
    }

    /// Follow a selection change.
    ///
    /// `selection` is the selected polyline's color and thickness, or `None` when nothing
    /// is selected, in which case the controls return to their defaults.
    pub fn sync(&mut self, selection: Option<(&str, f32)>) {
        match selection {
            Some((color, thickness)) => {
                self.enabled = true;
                self.color = if self.palette.iter().any(|c| c == color) {
                    color.to_string()
                } else {
                    self.fallback_color()
                };
                self.thickness = thickness;
            }
            None => {
                self.enabled = false;
                self.color = self.default_color.clone();
                self.thickness = self.default_thickness;
            }
        }
    }

    /// Whether the controls accept input
    pub fn is_active<S: RenderSurface>(&self, editor: &PolylineEditor<S>) -> bool {
        self.enabled || editor.is_drawing()
    }

    /// User picked a color: restyle the selection, if any
    pub fn apply_color<S: RenderSurface>(&mut self, color: &str, editor: &mut PolylineEditor<S>) {
        self.color = color.to_string();
        if editor.selected().is_some() {
            editor.update_selected_color(color);
        }
    }

    /// User moved the thickness slider: restyle the selection, if any
    pub fn apply_thickness<S: RenderSurface>(
        &mut self,
        thickness: f32,
        editor: &mut PolylineEditor<S>,
    ) {
        self.thickness = thickness;
        if editor.selected().is_some() {
            editor.update_selected_thickness(thickness);
        }
    }
}

/// Startup system: take palette and defaults from the loaded config
pub fn init_property_panel(config: Res<AppConfig>, mut panel: ResMut<PropertyPanel>) {
    *panel = PropertyPanel::from_config(&config.data);
}

/// Resync the controls whenever the selection changes
pub fn sync_property_panel(
    mut events: MessageReader<SelectionChanged>,
    editor: Res<Editor>,
    mut panel: ResMut<PropertyPanel>,
) {
    // Only the selection at the end of the frame matters
    if events.is_empty() {
        return;
    }
    events.clear();

    let (color, thickness) = editor.selected_properties();
    panel.sync(editor.selected().map(|_| (color.as_str(), thickness)));
}

/// Color combo box and thickness slider
pub fn property_controls(ui: &mut egui::Ui, panel: &mut PropertyPanel, editor: &mut Editor) {
    ui.add_enabled_ui(panel.is_active(&*editor), |ui| {
        ui.label("Color:");
        let mut picked = None;
        egui::ComboBox::from_id_salt("polyline_color")
            .selected_text(panel.color.as_str())
            .show_ui(ui, |ui| {
                for color in &panel.palette {
                    if ui.selectable_label(*color == panel.color, color.as_str()).clicked() {
                        picked = Some(color.clone());
                    }
                }
            });
        if let Some(color) = picked {
            panel.apply_color(&color, editor);
        }

        ui.add_space(8.0);

        ui.label("Thickness:");
        let mut thickness = panel.thickness;
        if ui
            .add(egui::Slider::new(&mut thickness, MIN_THICKNESS..=MAX_THICKNESS).step_by(0.5))
            .changed()
        {
            panel.apply_thickness(thickness, editor);
        }
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bevy::math::DVec2;

    use super::*;
    use crate::drawing::Drawing;

    fn panel() -> PropertyPanel {
        PropertyPanel::default()
    }

    fn editor_with_selection(color: &str, thickness: f32) -> Editor {
        let mut drawing = Drawing::default();
        drawing.push(vec![DVec2::ZERO, DVec2::new(100.0, 0.0)], color, thickness);
        let mut editor = Editor::default();
        editor.set_drawing_model(&drawing);
        editor.handle_pointer_down(DVec2::new(50.0, 0.0), Duration::ZERO);
        editor.handle_pointer_up(DVec2::new(50.0, 0.0));
        editor
    }

    #[test]
    fn test_default_panel() {
        let panel = panel();
        assert!(!panel.enabled);
        assert_eq!(panel.color, "Black");
        assert_eq!(panel.thickness, 2.0);
        assert_eq!(panel.palette[0], "Black");
    }

    #[test]
    fn test_sync_with_selection() {
        let mut panel = panel();
        panel.sync(Some(("Red", 5.0)));
        assert!(panel.enabled);
        assert_eq!(panel.color, "Red");
        assert_eq!(panel.thickness, 5.0);
    }

    #[test]
    fn test_unknown_color_falls_back_to_first_entry() {
        let mut panel = panel();
        panel.sync(Some(("#123456", 3.0)));
        assert_eq!(panel.color, "Black");
        assert_eq!(panel.thickness, 3.0);
    }

    #[test]
    fn test_sync_without_selection_resets() {
        let mut panel = panel();
        panel.sync(Some(("Blue", 9.0)));
        panel.sync(None);
        assert!(!panel.enabled);
        assert_eq!(panel.color, "Black");
        assert_eq!(panel.thickness, 2.0);
    }

    #[test]
    fn test_edits_forward_with_selection() {
        let mut editor = editor_with_selection("Black", 2.0);
        let mut panel = panel();
        panel.sync(Some(("Black", 2.0)));

        panel.apply_color("Green", &mut editor);
        panel.apply_thickness(7.0, &mut editor);

        assert_eq!(editor.selected_properties(), ("Green".to_string(), 7.0));
    }

    #[test]
    fn test_edits_without_selection_only_change_panel() {
        let mut drawing = Drawing::default();
        drawing.push(vec![DVec2::ZERO, DVec2::new(100.0, 0.0)], "Black", 2.0);
        let mut editor = Editor::default();
        editor.set_drawing_model(&drawing);
        let mut panel = panel();

        panel.apply_color("Red", &mut editor);
        panel.apply_thickness(4.0, &mut editor);

        assert_eq!(panel.color, "Red");
        assert_eq!(panel.thickness, 4.0);
        assert_eq!(editor.drawing().polylines()[0].color, "Black");
        assert_eq!(editor.drawing().polylines()[0].thickness, 2.0);
    }

    #[test]
    fn test_active_while_drawing() {
        let mut editor = Editor::default();
        let panel = panel();
        assert!(!panel.is_active(&editor));

        editor.start_new_polyline();
        assert!(panel.is_active(&editor));
    }
}
