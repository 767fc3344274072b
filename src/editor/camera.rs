use bevy::prelude::*;

/// Camera that egui renders the canvas and panels through
#[derive(Component)]
pub struct EditorCamera;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, EditorCamera));
}
