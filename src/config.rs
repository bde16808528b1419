//! Tuning knobs for the whole game.
//!
//! Every number the simulation depends on lives in `GameConfig` so a JSON
//! file can override it.  Missing fields fall back to the defaults below.

use std::path::{Path, PathBuf};

use serde::Deserialize;

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// A value parsed fine but makes no sense (e.g. a probability above 1).
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// ── Config ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Player
    pub player_size: f32,
    pub starting_lives: u32,
    /// Canvas widths below this count as "narrow" and place the player higher.
    pub narrow_width: f32,

    // Obstacles
    pub obstacle_size: f32,
    pub obstacle_min_speed: f32,
    /// Random extra speed in `[0, obstacle_speed_spread)`.
    pub obstacle_speed_spread: f32,
    pub swirl_amplitude: f32,
    pub swirl_step: f32,
    pub obstacle_spawn_chance: f64,
    pub max_obstacles: usize,

    // Coins
    pub coin_size: f32,
    pub coin_fall_speed: f32,
    pub coin_spawn_chance: f64,
    pub max_coins: usize,

    // Progression
    pub upgrade_cost: u32,
    pub points_per_level: u32,
    pub level_speed_bonus: f32,

    // Timing
    pub frame_millis: u64,
    pub game_over_delay_millis: u64,

    // Terminal mapping: canvas units covered by one cell
    pub cell_width: f32,
    pub cell_height: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            player_size: 100.0,
            starting_lives: 1,
            narrow_width: 768.0,

            obstacle_size: 150.0,
            obstacle_min_speed: 2.0,
            obstacle_speed_spread: 3.0,
            swirl_amplitude: 3.0,
            swirl_step: 0.07,
            obstacle_spawn_chance: 0.02,
            max_obstacles: 64,

            coin_size: 125.0,
            coin_fall_speed: 2.0,
            coin_spawn_chance: 0.02,
            max_coins: 64,

            upgrade_cost: 500,
            points_per_level: 10,
            level_speed_bonus: 0.5,

            frame_millis: 16,
            game_over_delay_millis: 2000,

            cell_width: 10.0,
            cell_height: 20.0,
        }
    }
}

impl GameConfig {
    /// Number of frames the game-over overlay stays up.
    pub fn game_over_frames(&self) -> u32 {
        let frame = self.frame_millis.max(1);
        u32::try_from(self.game_over_delay_millis.div_ceil(frame)).unwrap_or(u32::MAX)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let chances = [
            ("obstacle_spawn_chance", self.obstacle_spawn_chance),
            ("coin_spawn_chance", self.coin_spawn_chance),
        ];
        for (name, p) in chances {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid(format!("{} must be in [0, 1], got {}", name, p)));
            }
        }
        if self.player_size <= 0.0 || self.obstacle_size <= 0.0 || self.coin_size <= 0.0 {
            return Err(ConfigError::Invalid("entity sizes must be positive".to_string()));
        }
        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return Err(ConfigError::Invalid("cell dimensions must be positive".to_string()));
        }
        if self.starting_lives == 0 || i32::try_from(self.starting_lives).is_err() {
            return Err(ConfigError::Invalid(format!(
                "starting_lives must be in 1..={}, got {}",
                i32::MAX,
                self.starting_lives
            )));
        }
        if self.points_per_level == 0 {
            return Err(ConfigError::Invalid("points_per_level must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the user's config if one exists, otherwise use defaults.
    /// A broken file is reported and ignored rather than aborting startup.
    pub fn load_or_default() -> Self {
        let path = config_path();
        if !path.exists() {
            return GameConfig::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", path.display(), e);
                GameConfig::default()
            }
        }
    }
}

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
}

pub fn config_path() -> PathBuf {
    match std::env::var_os("SKY_DODGER_CONFIG") {
        Some(p) => PathBuf::from(p),
        None => home_dir().join(".sky_dodger.json"),
    }
}

pub fn log_path() -> PathBuf {
    match std::env::var_os("SKY_DODGER_LOG") {
        Some(p) => PathBuf::from(p),
        None => home_dir().join(".sky_dodger.log"),
    }
}
