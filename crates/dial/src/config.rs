use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use rondel::geometry::{Degrees, SliderConfig, SliderConfigError};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::path::Path;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

/// Compass presets for the arc start, for configs that prefer a name over
/// raw degrees. East is 0°; angles grow clockwise (screen coordinates).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[strum(serialize = "East", serialize = "e")]
    East,
    #[strum(serialize = "SouthEast", serialize = "se")]
    SouthEast,
    #[strum(serialize = "South", serialize = "s")]
    South,
    #[strum(serialize = "SouthWest", serialize = "sw")]
    SouthWest,
    #[strum(serialize = "West", serialize = "w")]
    West,
    #[strum(serialize = "NorthWest", serialize = "nw")]
    NorthWest,
    #[strum(serialize = "North", serialize = "n")]
    North,
    #[strum(serialize = "NorthEast", serialize = "ne")]
    NorthEast,
}

impl Direction {
    pub fn start_angle(self) -> Degrees {
        Degrees::new(match self {
            Self::East => 0.0,
            Self::SouthEast => 45.0,
            Self::South => 90.0,
            Self::SouthWest => 135.0,
            Self::West => 180.0,
            Self::NorthWest => 225.0,
            Self::North => 270.0,
            Self::NorthEast => 315.0,
        })
    }
}

/// The control's externally configurable attributes. `rotate` takes
/// precedence over `direction` when both are present.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderAttrs {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub arc: Degrees,
    pub rotate: Option<Degrees>,
    pub direction: Option<Direction>,
    pub disabled: bool,
    pub label: String,
}

impl Default for SliderAttrs {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            arc: Degrees::new(270.0),
            rotate: None,
            direction: None,
            disabled: false,
            label: "Round slider".to_string(),
        }
    }
}

impl SliderAttrs {
    pub fn start_angle(&self) -> Degrees {
        self.rotate.unwrap_or_else(|| {
            self.direction
                .unwrap_or(Direction::SouthWest)
                .start_angle()
        })
    }

    pub fn slider_config(&self) -> Result<SliderConfig, SliderConfigError> {
        SliderConfig::new(self.min, self.max, self.step, self.arc, self.start_angle())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub slider: SliderAttrs,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "rondel", "dial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("DIAL").separator("__"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Falling back to default configuration: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

/// Re-sends a reload event whenever the config file changes on disk, the
/// attribute-update path for a running control.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let Ok(config_path) = get_config_path() else {
        return;
    };
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return;
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Cannot watch config directory: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create config watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch {}: {}", config_dir.display(), e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) if touches_config(&event, &config_path) => {
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::error!("Config watch error: {}", e),
        }
    }
}

fn touches_config(event: &notify::Event, config_path: &Path) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    ) && event.paths.iter().any(|p| p == config_path)
}
