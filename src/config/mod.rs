use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_COLOR, DEFAULT_THICKNESS, MAX_THICKNESS, MIN_THICKNESS};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfigData {
    /// Last opened or saved drawing (not auto-loaded, used as the dialog start location)
    #[serde(default)]
    pub last_drawing_path: Option<PathBuf>,

    /// Color the property panel starts with
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Thickness the property panel starts with
    #[serde(default = "default_thickness")]
    pub default_thickness: f32,

    /// Colors offered by the color picker, first entry is the fallback
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_thickness() -> f32 {
    DEFAULT_THICKNESS
}

fn default_palette() -> Vec<String> {
    ["Black", "Red", "Green", "Blue", "Orange", "Purple", "Gray"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            last_drawing_path: None,
            default_color: default_color(),
            default_thickness: default_thickness(),
            palette: default_palette(),
        }
    }
}

impl AppConfigData {
    /// Repair values a hand-edited file may have broken
    fn sanitize(&mut self) {
        if self.palette.is_empty() {
            warn!("Config palette is empty, using the default palette");
            self.palette = default_palette();
        }
        if !self.palette.contains(&self.default_color) {
            self.default_color = self.palette[0].clone();
        }
        if !self.default_thickness.is_finite() {
            self.default_thickness = DEFAULT_THICKNESS;
        }
        self.default_thickness = self.default_thickness.clamp(MIN_THICKNESS, MAX_THICKNESS);
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: get_config_path(),
            dirty: false,
        }
    }
}

/// Resource for the "drawing file missing" warning dialog
#[derive(Resource, Default)]
pub struct MissingDrawingWarning {
    pub show: bool,
    pub path: Option<PathBuf>,
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to update the last drawing path in config
#[derive(Message)]
pub struct UpdateLastDrawingPathRequest {
    pub path: PathBuf,
}

/// Get the path to the config file (platform-appropriate location)
fn get_config_path() -> PathBuf {
    crate::paths::config_file()
}

/// Result of loading config from disk
struct LoadConfigResult {
    data: AppConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Parse config file contents, falling back to defaults on error
fn parse_config(json: &str) -> LoadConfigResult {
    match serde_json::from_str::<AppConfigData>(json) {
        Ok(mut data) => {
            data.sanitize();
            LoadConfigResult {
                data,
                reset_reason: None,
            }
        }
        Err(e) => {
            warn!("Failed to parse config file: {}", e);
            LoadConfigResult {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Configuration file was corrupted: {}", e)),
            }
        }
    }
}

/// Load configuration from disk
fn load_config(config_path: &std::path::Path) -> LoadConfigResult {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return LoadConfigResult {
            data: AppConfigData::default(),
            reset_reason: None,
        };
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => {
            let result = parse_config(&json);
            if result.reset_reason.is_none() {
                info!("Loaded config from {:?}", config_path);
            }
            result
        }
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            LoadConfigResult {
                data: AppConfigData::default(),
                reset_reason: Some(format!("Could not read configuration file: {}", e)),
            }
        }
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;
    config.dirty = false;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// Startup system to check if last drawing exists
fn check_last_drawing_exists(config: Res<AppConfig>, mut warning: ResMut<MissingDrawingWarning>) {
    if let Some(ref path) = config.data.last_drawing_path
        && !path.exists()
    {
        warning.show = true;
        warning.path = Some(path.clone());
        info!("Last opened drawing no longer exists: {:?}", path);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to update last drawing path
fn update_last_drawing_path_system(
    mut events: MessageReader<UpdateLastDrawingPathRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if config.data.last_drawing_path.as_ref() == Some(&event.path) {
            continue;
        }
        config.data.last_drawing_path = Some(event.path.clone());
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<MissingDrawingWarning>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<UpdateLastDrawingPathRequest>()
            .add_systems(
                Startup,
                (load_config_system, check_last_drawing_exists)
                    .chain()
                    .in_set(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    update_last_drawing_path_system
                        .run_if(on_message::<UpdateLastDrawingPathRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}
