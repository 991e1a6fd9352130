//! Display theme preference
//!
//! A single string (`"light"` or `"dark"`) persisted as a tiny JSON file.
//! The game session never reads it; it only exists for the UI.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Failed to write theme preference: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode theme preference: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

/// On-disk and over-the-wire shape
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemePreference {
    pub theme: Theme,
}

pub struct ThemeStore {
    /// None = keep in memory only
    path: Option<PathBuf>,
    current: Theme,
}

impl ThemeStore {
    /// Read the stored preference. A missing or unreadable file means the default theme.
    pub async fn load(path: PathBuf) -> Self {
        let current = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => match serde_json::from_str::<ThemePreference>(&raw) {
                Ok(pref) => pref.theme,
                Err(e) => {
                    tracing::warn!(
                        "Ignoring malformed theme file {}: {}",
                        path.display(),
                        e
                    );
                    Theme::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Theme::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme file {}: {}", path.display(), e);
                Theme::default()
            }
        };

        Self {
            path: Some(path),
            current,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            current: Theme::default(),
        }
    }

    pub fn get(&self) -> Theme {
        self.current
    }

    pub async fn set(&mut self, theme: Theme) -> Result<(), ThemeError> {
        if let Some(path) = &self.path {
            let raw = serde_json::to_string(&ThemePreference { theme })?;
            tokio::fs::write(path, raw).await?;
        }
        self.current = theme;
        tracing::info!("Theme set to {}", theme.as_str());
        Ok(())
    }

    pub async fn toggle(&mut self) -> Result<Theme, ThemeError> {
        let next = self.current.toggled();
        self.set(next).await?;
        Ok(next)
    }
}
