use crate::consts;
use ratatui::style::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Dimensions of the playing field
    pub(crate) board: BoardConfig,

    /// Game loop settings
    pub(crate) timing: TimingConfig,

    /// Colors used when drawing the board
    pub(crate) colors: Palette,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if the resulting configuration is not
    /// playable.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                tracing::debug!(path = %path.display(), "no configuration file; using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config = Config::parse(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Deserialize & validate configuration from TOML source
    pub(crate) fn parse(src: &str) -> Result<Config, ConfigError> {
        let config = toml::from_str::<Config>(src)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let BoardConfig {
            width,
            height,
            unit_size,
        } = self.board;
        if unit_size == 0 {
            return Err(ConfigError::Invalid("unit-size must be positive".into()));
        }
        if width % unit_size != 0 || height % unit_size != 0 {
            return Err(ConfigError::Invalid(format!(
                "board dimensions {width}x{height} must be multiples of unit-size {unit_size}"
            )));
        }
        if i32::from(width / unit_size) < consts::INITIAL_SNAKE_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "board must be at least {} cells wide",
                consts::INITIAL_SNAKE_LENGTH
            )));
        }
        if height == 0 {
            return Err(ConfigError::Invalid(
                "board must be at least one cell high".into(),
            ));
        }
        // The board is drawn inside a border, between the score bar and the
        // help line
        let columns = width / unit_size;
        let rows = height / unit_size;
        let max_columns = (consts::DISPLAY_SIZE.width - 2) / consts::CELL_WIDTH;
        let max_rows = consts::DISPLAY_SIZE.height - 4;
        if columns > max_columns || rows > max_rows {
            return Err(ConfigError::Invalid(format!(
                "board of {columns}x{rows} cells exceeds the maximum of {max_columns}x{max_rows}"
            )));
        }
        if self.timing.tick_delay == 0 {
            return Err(ConfigError::Invalid("tick-delay must be positive".into()));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct BoardConfig {
    /// Width of the board in pixels
    pub(crate) width: u16,

    /// Height of the board in pixels
    pub(crate) height: u16,

    /// Width & height of a single grid cell in pixels
    pub(crate) unit_size: u16,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            width: consts::DEFAULT_BOARD_WIDTH,
            height: consts::DEFAULT_BOARD_HEIGHT,
            unit_size: consts::DEFAULT_UNIT_SIZE,
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct TimingConfig {
    /// Milliseconds between movements of the snake
    pub(crate) tick_delay: u64,
}

impl TimingConfig {
    pub(crate) fn tick_period(self) -> Duration {
        Duration::from_millis(self.tick_delay)
    }
}

impl Default for TimingConfig {
    fn default() -> TimingConfig {
        TimingConfig {
            tick_delay: consts::DEFAULT_TICK_DELAY,
        }
    }
}

/// The colors in which the board is drawn.  In a configuration file, each
/// color is either a name (e.g., "red" or "light-green") or a hex RGB code.
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) snake: Color,
    pub(crate) snake_border: Color,
    pub(crate) food: Color,
    pub(crate) text: Color,
}

impl Default for Palette {
    fn default() -> Palette {
        Palette {
            background: consts::DEFAULT_BACKGROUND_COLOR,
            snake: consts::DEFAULT_SNAKE_COLOR,
            snake_border: consts::DEFAULT_SNAKE_BORDER_COLOR,
            food: consts::DEFAULT_FOOD_COLOR,
            text: consts::DEFAULT_TEXT_COLOR,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
