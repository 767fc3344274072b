//! Centralized color theme for the application.
//!
//! This module provides all colors used by the canvas and the toolbar, and the mapping
//! from stored polyline color strings to paint colors.

use bevy_egui::egui;

// ============================================================================
// Canvas Colors
// ============================================================================

/// Paper white behind the drawing
pub const CANVAS_BACKGROUND: egui::Color32 = egui::Color32::WHITE;

/// Fill of the square node handles
pub const HANDLE_FILL: egui::Color32 = egui::Color32::WHITE;

/// Outline of the square node handles
pub const HANDLE_STROKE: egui::Color32 = egui::Color32::from_rgb(30, 30, 30);

/// Dashed line of the polyline being drawn
pub const PREVIEW_COLOR: egui::Color32 = egui::Color32::GRAY;

/// Width of the dashed preview line
pub const PREVIEW_STROKE_WIDTH: f32 = 1.0;

// ============================================================================
// Toolbar Colors
// ============================================================================

pub const STATUS_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

// ============================================================================
// Polyline Colors
// ============================================================================

/// Named colors understood in drawing files, matched case-insensitively
const NAMED_COLORS: &[(&str, egui::Color32)] = &[
    ("black", egui::Color32::BLACK),
    ("white", egui::Color32::WHITE),
    ("red", egui::Color32::from_rgb(255, 0, 0)),
    ("green", egui::Color32::from_rgb(0, 128, 0)),
    ("blue", egui::Color32::from_rgb(0, 0, 255)),
    ("yellow", egui::Color32::from_rgb(255, 255, 0)),
    ("orange", egui::Color32::from_rgb(255, 165, 0)),
    ("purple", egui::Color32::from_rgb(128, 0, 128)),
    ("gray", egui::Color32::from_rgb(128, 128, 128)),
    ("grey", egui::Color32::from_rgb(128, 128, 128)),
    ("brown", egui::Color32::from_rgb(165, 42, 42)),
    ("pink", egui::Color32::from_rgb(255, 192, 203)),
    ("cyan", egui::Color32::from_rgb(0, 255, 255)),
    ("magenta", egui::Color32::from_rgb(255, 0, 255)),
];

/// Paint color for a stored color name or `#rrggbb[aa]` string.
///
/// Anything unrecognised paints black.
pub fn polyline_color(name: &str) -> egui::Color32 {
    let name = name.trim();
    if name.starts_with('#') {
        return egui::Color32::from_hex(name).unwrap_or(egui::Color32::BLACK);
    }

    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
        .unwrap_or(egui::Color32::BLACK)
}
