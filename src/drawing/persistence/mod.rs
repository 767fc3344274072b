//! Drawing persistence: saving and loading drawings as JSON documents.
//!
//! File I/O is blocking and runs inside the systems that handle the request messages.
//! A failed read or write is stored in [`DrawingLoadError`] / [`DrawingSaveError`] for
//! the UI and leaves the working drawing untouched.
//!
//! ## Module Structure
//!
//! - [`error`] - Error type for file operations
//! - [`messages`] - Message types for save and load requests
//! - [`resources`] - Resource types for state tracking
//! - [`helpers`] - Directory helpers
//! - [`save`] - Save function and system
//! - [`load`] - Load function and system

mod error;
mod helpers;
mod load;
mod messages;
mod resources;
mod save;


pub use helpers::{dialog_start_dir, ensure_drawings_directory};
pub use load::load_drawing_system;
pub use messages::{LoadDrawingRequest, SaveDrawingRequest};
pub use resources::{CurrentDrawingFile, DrawingLoadError, DrawingSaveError};
pub use save::save_drawing_system;
