//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

use std::time::Duration;

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Default stroke color for new polylines and the property panel
pub const DEFAULT_COLOR: &str = "Black";

/// Default stroke thickness for new polylines and the property panel
pub const DEFAULT_THICKNESS: f32 = 2.0;

/// Thickness slider range
pub const MIN_THICKNESS: f32 = 1.0;
pub const MAX_THICKNESS: f32 = 20.0;

/// Maximum distance (canvas units) from a segment that still counts as a click on the shape
pub const HIT_TOLERANCE: f64 = 10.0;

/// Maximum distance from a segment for a double-click to insert a node
pub const INSERT_MAX_DISTANCE: f64 = 15.0;

/// Side length of the square node handles
pub const HANDLE_SIZE: f64 = 8.0;

/// Two pointer-downs closer than this in time may form a double-click
pub const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(400);

/// Two pointer-downs closer than this in space may form a double-click
pub const DOUBLE_CLICK_DISTANCE: f64 = 10.0;

/// Dash pattern of the in-progress polyline preview
pub const PREVIEW_DASH_LENGTH: f32 = 4.0;
pub const PREVIEW_GAP_LENGTH: f32 = 2.0;
