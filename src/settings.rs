use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{error, info};
use uav_navigation::SearchConfig;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const LOCAL_CONFIG_PATH: &str = "config/local.toml";

/// Top-level application settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub planner: SearchConfig,
    pub io: IoConfig,
    pub viewer: ViewerConfig,
}

/// Mission input and path output locations.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct IoConfig {
    /// Start, target, heading, max turn angle and step size.
    pub input: PathBuf,
    /// One `(x,y)` waypoint per line.
    pub output: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("resources/input.txt"),
            output: PathBuf::from("resources/path_output.txt"),
        }
    }
}

/// On-screen path viewer.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub enabled: bool,
    /// Upper bound on pixels per distance unit; the view zooms out to fit.
    pub scale: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            scale: 40.0,
        }
    }
}

/// Loads `config/default.toml`, then `config/local.toml` if present, then
/// `UAV_`-prefixed environment variables (`UAV_PLANNER__MAX_EXPANSIONS=5000`).
pub fn load_config() -> Result<AppConfig, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let builder = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .add_source(File::new(LOCAL_CONFIG_PATH, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix("UAV")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    match build(builder) {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    builder.build()?.try_deserialize()
}
