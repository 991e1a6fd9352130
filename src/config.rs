//! Server configuration from environment variables

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::types::GameConfig;

/// 7468 is "IMPO" on a phone keypad
pub const DEFAULT_BIND: &str = "0.0.0.0:7468";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_THEME_PATH: &str = "impostor_theme.json";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    /// Front-end assets served as the fallback route
    pub static_dir: PathBuf,
    /// JSON word list; None = built-in list
    pub words_path: Option<PathBuf>,
    pub theme_path: PathBuf,
    /// Initial game settings, already clamped
    pub game: GameConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 7468)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            words_path: None,
            theme_path: PathBuf::from(DEFAULT_THEME_PATH),
            game: GameConfig::default(),
        }
    }
}

/// Trimmed, non-empty value of an environment variable
fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse an environment variable, warning (and returning None) on garbage
fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = env_string(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            None
        }
    }
}

/// Boolean flag: `true`/`false` or `1`/`0`, warning (and returning None) on anything else
fn env_bool(key: &str) -> Option<bool> {
    let raw = env_string(key)?;
    match raw.to_lowercase().as_str() {
        "1" => Some(true),
        "0" => Some(false),
        lower => match lower.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
                None
            }
        },
    }
}

impl ServerConfig {
    /// Load config from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind = env_parse("IMPOSTOR_BIND").unwrap_or(defaults.bind);
        let static_dir = env_string("IMPOSTOR_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let words_path = env_string("IMPOSTOR_WORDS_PATH").map(PathBuf::from);
        let theme_path = env_string("IMPOSTOR_THEME_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.theme_path);

        // Same clamping as the settings screen
        let mut game = GameConfig::default();
        if let Some(players) = env_parse("IMPOSTOR_PLAYERS") {
            game.set_player_count(players);
        }
        if let Some(impostors) = env_parse("IMPOSTOR_IMPOSTORS") {
            game.set_impostor_count(impostors);
        }
        if let Some(minutes) = env_parse("IMPOSTOR_MINUTES") {
            game.set_round_minutes(minutes);
        }
        if let Some(hints) = env_bool("IMPOSTOR_HINTS") {
            game.set_hint_enabled(hints);
        }

        Self {
            bind,
            static_dir,
            words_path,
            theme_path,
            game,
        }
    }
}
