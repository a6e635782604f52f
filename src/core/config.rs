//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tictactoe/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Colours stay strings here; the TUI turns them into a theme.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TicTacToeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub x_glyph: Option<String>,
    pub o_glyph: Option<String>,
    pub x_color: Option<String>,
    pub o_color: Option<String>,
    pub show_help: Option<bool>,
    pub mouse: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "tictactoe.log";
pub const DEFAULT_X_GLYPH: &str = "X";
pub const DEFAULT_O_GLYPH: &str = "O";
pub const DEFAULT_X_COLOR: &str = "cyan";
pub const DEFAULT_O_COLOR: &str = "magenta";
/// Widest glyph accepted from config, in terminal columns.
pub const MAX_GLYPH_WIDTH: usize = 8;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub x_glyph: String,
    pub o_glyph: String,
    pub x_color: String,
    pub o_color: String,
    pub show_help: bool,
    pub mouse: bool,
}

/// Values given on the command line (None / false = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub no_mouse: bool,
}

// ============================================================================
// Notices
// ============================================================================

/// A log message produced while loading or resolving config.
///
/// The file logger can only start once the log file is known, so messages
/// are collected here and replayed by `main` after the logger is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Write collected notices to the active logger.
pub fn replay_notices(notices: &[Notice]) {
    for notice in notices {
        log::log!(notice.level, "{}", notice.message);
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tictactoe/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tictactoe").join("config.toml"))
}

/// Load config from an explicit path, or from `~/.tictactoe/config.toml`.
///
/// A missing default file is generated (commented out) and defaults are
/// returned. A missing explicit file is an error.
pub fn load_config(
    explicit: Option<&Path>,
    notices: &mut Vec<Notice>,
) -> Result<TicTacToeConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) => {
                if !p.exists() {
                    notices.push(Notice::new(
                        Level::Info,
                        format!("No config file found, generating default at {}", p.display()),
                    ));
                    if let Err(e) = generate_default_config(&p) {
                        notices.push(Notice::new(
                            Level::Warn,
                            format!("Failed to write default config: {e}"),
                        ));
                    }
                    return Ok(TicTacToeConfig::default());
                }
                p
            }
            None => {
                notices.push(Notice::new(
                    Level::Warn,
                    "Could not determine home directory, using default config",
                ));
                return Ok(TicTacToeConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    notices.push(Notice::new(
        Level::Info,
        format!("Loaded config from {}", path.display()),
    ));
    notices.push(Notice::new(Level::Debug, format!("Config: {config:?}")));
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<TicTacToeConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r##"# Tic-tac-toe Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# log_file = "tictactoe.log"         # Or set TICTACTOE_LOG_FILE env var

# [display]
# x_glyph = "X"
# o_glyph = "O"
# x_color = "cyan"                   # Any ratatui colour name or "#rrggbb"
# o_color = "magenta"
# show_help = true
# mouse = true                       # Click cells and history entries
"##;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(
    config: &TicTacToeConfig,
    cli: &CliOverrides,
    notices: &mut Vec<Notice>,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("TICTACTOE_LOG_LEVEL").ok())
        .or_else(|| config.general.log_level.clone())
        .map(|s| parse_level(&s, notices))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: env → config → default
    let log_file = std::env::var("TICTACTOE_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let display = &config.display;
    ResolvedConfig {
        log_level,
        log_file: PathBuf::from(log_file),
        x_glyph: glyph_or(display.x_glyph.as_deref(), DEFAULT_X_GLYPH, notices),
        o_glyph: glyph_or(display.o_glyph.as_deref(), DEFAULT_O_GLYPH, notices),
        x_color: display
            .x_color
            .clone()
            .unwrap_or_else(|| DEFAULT_X_COLOR.to_string()),
        o_color: display
            .o_color
            .clone()
            .unwrap_or_else(|| DEFAULT_O_COLOR.to_string()),
        show_help: display.show_help.unwrap_or(true),
        mouse: !cli.no_mouse && display.mouse.unwrap_or(true),
    }
}

fn parse_level(s: &str, notices: &mut Vec<Notice>) -> LevelFilter {
    LevelFilter::from_str(s.trim()).unwrap_or_else(|_| {
        notices.push(Notice::new(
            Level::Warn,
            format!("Unknown log level '{s}', using {DEFAULT_LOG_LEVEL}"),
        ));
        DEFAULT_LOG_LEVEL
    })
}

/// Blank glyphs would make a played cell look empty, and a glyph wider
/// than a cell can hold is never legible.
fn glyph_or(glyph: Option<&str>, default: &str, notices: &mut Vec<Notice>) -> String {
    match glyph.map(str::trim) {
        Some(g) if g.is_empty() => {
            notices.push(Notice::new(
                Level::Warn,
                format!("Ignoring blank glyph, using '{default}'"),
            ));
            default.to_string()
        }
        Some(g) if g.width() > MAX_GLYPH_WIDTH => {
            notices.push(Notice::new(
                Level::Warn,
                format!("Glyph wider than {MAX_GLYPH_WIDTH} columns, using '{default}'"),
            ));
            default.to_string()
        }
        Some(g) => g.to_string(),
        None => default.to_string(),
    }
}
