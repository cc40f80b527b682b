//! Configuration for stardeck
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority, `STARDECK_*`)
//! 2. Config file (~/.config/stardeck/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark", "light", "dracula", "nord"
    pub theme: String,

    /// Use the theme's background color (true) or the terminal's default (false)
    pub use_theme_background: bool,

    /// Whether to run the TUI (false = validate the deck and exit)
    pub enable_tui: bool,

    /// Navigation timing constants
    pub timing: TimingConfig,

    /// Starfield background settings
    pub starfield: StarfieldConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Timing knobs for the navigator and its input adapters.
///
/// Defaults mirror the classic web values: an 800ms slide, a 100ms wheel
/// rate limit, and a swipe that must cover 5 cells in under 500ms.
#[derive(Debug, Clone, Copy)]
pub struct TimingConfig {
    /// Slide transition duration; also the transition-lock timeout
    pub transition_ms: u64,
    /// Minimum interval between wheel-driven navigations
    pub wheel_throttle_ms: u64,
    /// Minimum drag distance (terminal cells, dominant axis) for a swipe
    pub swipe_min_cells: u16,
    /// Maximum drag duration for a swipe
    pub swipe_max_ms: u64,
}

impl TimingConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn wheel_throttle(&self) -> Duration {
        Duration::from_millis(self.wheel_throttle_ms)
    }

    pub fn swipe_max(&self) -> Duration {
        Duration::from_millis(self.swipe_max_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_ms: 800,
            wheel_throttle_ms: 100,
            swipe_min_cells: 5,
            swipe_max_ms: 500,
        }
    }
}

/// Starfield background settings
#[derive(Debug, Clone, Copy)]
pub struct StarfieldConfig {
    /// Render the animated starfield behind section content
    pub enabled: bool,
    /// Fraction of terminal cells occupied by stars (0.0 - 0.2)
    pub density: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            density: 0.02,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,
    /// Also write logs to rotating files
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file name prefix
    pub file_prefix: String,
    /// Rotation policy for log files
    pub file_rotation: LogRotation,
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("stardeck")
                .join("logs"),
            file_prefix: "stardeck.log".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            use_theme_background: true,
            enable_tui: true,
            timing: TimingConfig::default(),
            starfield: StarfieldConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File representation (all fields optional so partial configs merge cleanly)
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    theme: Option<String>,
    use_theme_background: Option<bool>,
    timing: Option<FileTiming>,
    starfield: Option<FileStarfield>,
    logging: Option<FileLogging>,
}

#[derive(Debug, Default, Deserialize)]
struct FileTiming {
    transition_ms: Option<u64>,
    wheel_throttle_ms: Option<u64>,
    swipe_min_cells: Option<u16>,
    swipe_max_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileStarfield {
    enabled: Option<bool>,
    density: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<PathBuf>,
    file_prefix: Option<String>,
    file_rotation: Option<LogRotation>,
}

impl Config {
    /// Path to the config file (~/.config/stardeck/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("stardeck").join("config.toml"))
    }

    /// Load configuration: defaults, overlaid by the config file, overlaid
    /// by environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = Self::config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(raw) => match toml::from_str::<FileConfig>(&raw) {
                        Ok(file) => config.apply_file(file),
                        Err(e) => eprintln!(
                            "Warning: ignoring malformed config {}: {}",
                            path.display(),
                            e
                        ),
                    },
                    Err(e) => {
                        eprintln!("Warning: could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        config.apply_env();
        config
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(theme) = file.theme {
            self.theme = theme;
        }
        if let Some(v) = file.use_theme_background {
            self.use_theme_background = v;
        }
        if let Some(t) = file.timing {
            if let Some(v) = t.transition_ms {
                self.timing.transition_ms = v;
            }
            if let Some(v) = t.wheel_throttle_ms {
                self.timing.wheel_throttle_ms = v;
            }
            if let Some(v) = t.swipe_min_cells {
                self.timing.swipe_min_cells = v;
            }
            if let Some(v) = t.swipe_max_ms {
                self.timing.swipe_max_ms = v;
            }
        }
        if let Some(s) = file.starfield {
            if let Some(v) = s.enabled {
                self.starfield.enabled = v;
            }
            if let Some(v) = s.density {
                self.starfield.density = v.clamp(0.0, 0.2);
            }
        }
        if let Some(l) = file.logging {
            if let Some(v) = l.level {
                self.logging.level = v;
            }
            if let Some(v) = l.file_enabled {
                self.logging.file_enabled = v;
            }
            if let Some(v) = l.file_dir {
                self.logging.file_dir = v;
            }
            if let Some(v) = l.file_prefix {
                self.logging.file_prefix = v;
            }
            if let Some(v) = l.file_rotation {
                self.logging.file_rotation = v;
            }
        }
    }

    fn apply_env(&mut self) {
        if let Ok(theme) = std::env::var("STARDECK_THEME") {
            self.theme = theme;
        }
        if let Ok(v) = std::env::var("STARDECK_TRANSITION_MS") {
            if let Ok(ms) = v.parse() {
                self.timing.transition_ms = ms;
            }
        }
        if let Ok(v) = std::env::var("STARDECK_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Ok(v) = std::env::var("STARDECK_STARFIELD") {
            self.starfield.enabled = v != "0" && !v.eq_ignore_ascii_case("false");
        }
    }

    /// Create the config file with the default template if it doesn't exist.
    /// Best-effort: failures are reported but never fatal.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        if let Err(e) = std::fs::write(&path, Self::default().to_toml()) {
            eprintln!("Warning: could not write config template: {}", e);
        }
    }

    /// Render this configuration as a commented TOML template.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# stardeck configuration
# Values here override built-in defaults; STARDECK_* env vars override both.

# Theme: "dark", "light", "dracula", "nord"
theme = "{theme}"

# Use the theme's background color (false keeps the terminal's own)
use_theme_background = {bg}

[timing]
# Slide transition duration in ms (also the transition-lock timeout)
transition_ms = {transition}
# Minimum interval between wheel-driven navigations, in ms
wheel_throttle_ms = {wheel}
# Minimum drag distance (cells) and maximum duration (ms) for a swipe
swipe_min_cells = {swipe_cells}
swipe_max_ms = {swipe_ms}

[starfield]
enabled = {star_enabled}
# Fraction of cells occupied by stars (0.0 - 0.2)
density = {density}

[logging]
# "error", "warn", "info", "debug", "trace"
level = "{level}"
# Write logs to rotating files in addition to the in-app log view
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
# "hourly", "daily", "never"
file_rotation = "{rotation}"
"#,
            theme = self.theme,
            bg = self.use_theme_background,
            transition = self.timing.transition_ms,
            wheel = self.timing.wheel_throttle_ms,
            swipe_cells = self.timing.swipe_min_cells,
            swipe_ms = self.timing.swipe_max_ms,
            star_enabled = self.starfield.enabled,
            density = self.starfield.density,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            rotation = match self.logging.file_rotation {
                LogRotation::Hourly => "hourly",
                LogRotation::Daily => "daily",
                LogRotation::Never => "never",
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_timings() {
        let config = Config::default();
        assert_eq!(config.timing.transition_ms, 800);
        assert_eq!(config.timing.wheel_throttle_ms, 100);
        assert_eq!(config.timing.swipe_min_cells, 5);
        assert_eq!(config.timing.swipe_max_ms, 500);
    }

    #[test]
    fn test_template_round_trips_through_parser() {
        let config = Config::default();
        let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
        assert_eq!(parsed.theme.as_deref(), Some("dark"));
        let timing = parsed.timing.unwrap();
        assert_eq!(timing.transition_ms, Some(800));
        let logging = parsed.logging.unwrap();
        assert_eq!(logging.file_rotation, Some(LogRotation::Daily));
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let raw = r#"
            theme = "nord"
            [timing]
            transition_ms = 400
        "#;
        let file: FileConfig = toml::from_str(raw).unwrap();
        let mut config = Config::default();
        config.apply_file(file);
        assert_eq!(config.theme, "nord");
        assert_eq!(config.timing.transition_ms, 400);
        // Untouched fields keep their defaults
        assert_eq!(config.timing.wheel_throttle_ms, 100);
        assert!(config.starfield.enabled);
    }
}
