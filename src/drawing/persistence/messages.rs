//! Message types for drawing persistence operations.

use bevy::prelude::*;
use std::path::PathBuf;

#[derive(Message)]
pub struct SaveDrawingRequest {
    pub path: PathBuf,
}

#[derive(Message)]
pub struct LoadDrawingRequest {
    pub path: PathBuf,
}
