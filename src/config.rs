use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::game::{BoardDims, GameState, ModeRequest, INITIAL_CLOCK_SECS};

/// Starting board and clock for each new game.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Preset name: "normal", "large" or "9x10"
    pub mode: String,
    /// Explicit dimensions, used when `mode` is not a preset
    pub rows: Option<i64>,
    pub cols: Option<i64>,
    pub connect_n: Option<i64>,
    pub initial_clock_secs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: "normal".into(),
            rows: None,
            cols: None,
            connect_n: None,
            initial_clock_secs: INITIAL_CLOCK_SECS,
        }
    }
}

impl GameConfig {
    pub fn mode_request(&self) -> ModeRequest {
        ModeRequest {
            mode: Some(self.mode.clone()),
            rows: self.rows,
            cols: self.cols,
            connect_n: self.connect_n,
        }
    }

    /// Board dimensions for the first game.
    pub fn dims(&self) -> Result<BoardDims, ConfigError> {
        Ok(self.mode_request().resolve(BoardDims::default())?)
    }

    /// Build the initial game state described by this config.
    pub fn initial_state(&self) -> Result<GameState, ConfigError> {
        Ok(GameState::new(self.dims()?, self.initial_clock_secs))
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub tick_interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            tick_interval_ms: 1000,
        }
    }
}

impl ClockConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tried once when `port` cannot be bound
    pub fallback_port: u16,
    pub static_dir: PathBuf,
    /// Directory holding menu.html and index.html
    pub pages_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".into(),
            port: 8080,
            fallback_port: 8081,
            static_dir: PathBuf::from("static"),
            pages_dir: PathBuf::from("."),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub clock: ClockConfig,
    pub server: ServerConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            game: GameConfig::default(),
            clock: ClockConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game.initial_clock_secs == 0 {
            return Err(ConfigError::Validation(
                "game.initial_clock_secs must be > 0".into(),
            ));
        }
        self.game.dims()?;

        if self.clock.tick_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "clock.tick_interval_ms must be > 0".into(),
            ));
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "server.host must not be empty".into(),
            ));
        }
        if self.server.port == self.server.fallback_port {
            return Err(ConfigError::Validation(
                "server.fallback_port must differ from server.port".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        // Plain strings, numbers and paths always serialize.
        toml::to_string_pretty(&AppConfig::default()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModeError;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        let dims = config.game.dims().unwrap();
        assert_eq!((dims.rows(), dims.cols(), dims.connect_n()), (6, 7, 4));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[server]
port = 9000
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 9000);
        // Other fields should be defaults
        assert_eq!(config.server.fallback_port, 8081);
        assert_eq!(config.game.initial_clock_secs, 180);
        assert_eq!(config.clock.tick_interval_ms, 1000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        let default = AppConfig::default();
        assert_eq!(config.game.mode, default.game.mode);
        assert_eq!(config.server.port, default.server.port);
    }

    #[test]
    fn test_preset_mode_from_toml() {
        let config: AppConfig = toml::from_str("[game]\nmode = \"large\"\n").unwrap();
        let state = config.game.initial_state().unwrap();
        assert_eq!(state.board().rows(), 11);
        assert_eq!(state.board().cols(), 9);
    }

    #[test]
    fn test_custom_dims_from_toml() {
        let toml_str = r#"
[game]
mode = "custom"
rows = 8
cols = 12
connect_n = 5
initial_clock_secs = 60
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        config.validate().unwrap();
        let state = config.game.initial_state().unwrap();
        assert_eq!(state.dims().connect_n(), 5);
        assert_eq!(state.board().cols(), 12);
        assert_eq!(state.remaining(crate::game::Player::One), 60);
    }

    #[test]
    fn test_validation_rejects_zero_clock() {
        let mut config = AppConfig::default();
        config.game.initial_clock_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_tick_interval() {
        let mut config = AppConfig::default();
        config.clock.tick_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_same_ports() {
        let mut config = AppConfig::default();
        config.server.fallback_port = config.server.port;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_host() {
        let mut config = AppConfig::default();
        config.server.host = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unwinnable_board() {
        let mut config = AppConfig::default();
        config.game.mode = "custom".into();
        config.game.rows = Some(3);
        config.game.cols = Some(3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Mode(ModeError::ConnectTooLong { .. }))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[clock]
tick_interval_ms = 250
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.clock.tick_interval(), Duration::from_millis(250));
        // Others are defaults
        assert_eq!(config.game.mode, "normal");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\ninitial_clock_secs = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));

        std::fs::write(&path, "[game\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
