use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Opaque ID types for type safety
pub type RoundId = String;
pub type PlayerNumber = u32;

pub const MIN_PLAYERS: u32 = 3;
pub const MAX_PLAYERS: u32 = 20;
pub const DEFAULT_PLAYERS: u32 = 6;

pub const MIN_IMPOSTORS: u32 = 1;
pub const MAX_IMPOSTORS: u32 = 3;
pub const DEFAULT_IMPOSTORS: u32 = 1;

pub const MIN_ROUND_MINUTES: u32 = 1;
pub const MAX_ROUND_MINUTES: u32 = 60;
pub const DEFAULT_ROUND_MINUTES: u32 = 3;

/// Word shown when no dataset could be loaded
pub const FALLBACK_WORD: &str = "Parola";
pub const FALLBACK_HINT: &str = "Suggerimento";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Rules,
    Settings,
    Distribution,
    Playing,
    EndTurn,
    Result,
}

/// User-editable session configuration.
///
/// Setters clamp into their domain and keep `impostor_count` under the
/// ceiling derived from `player_count` (see `state::config`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub player_count: u32,
    pub impostor_count: u32,
    pub round_minutes: u32,
    pub hint_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYERS,
            impostor_count: DEFAULT_IMPOSTORS,
            round_minutes: DEFAULT_ROUND_MINUTES,
            hint_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordPair {
    pub word: String,
    #[serde(default)]
    pub hint: String,
}

impl WordPair {
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_WORD, FALLBACK_HINT)
    }
}

/// What the current player sees once their role is revealed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoleCard {
    Crew { word: String },
    Impostor { hint: Option<String> },
}

/// One complete cycle from role distribution to result.
///
/// Replaced as a whole on every new round, never patched across rounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Round {
    pub id: RoundId,
    pub number: u32,
    pub word_pair: WordPair,
    pub impostors: BTreeSet<PlayerNumber>,
    pub current_player: PlayerNumber,
    pub revealed: bool,
    /// Only set once the countdown has started
    pub remaining_seconds: Option<u32>,
}

/// Shown on the RESULT screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub word: String,
    pub hint: String,
    /// Sorted ascending
    pub impostors: Vec<PlayerNumber>,
}

/// Everything a player (or the countdown) can ask the session to do
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    GoToSettings,
    SetPlayerCount { count: u32 },
    SetImpostorCount { count: u32 },
    SetRoundMinutes { minutes: u32 },
    SetHintEnabled { enabled: bool },
    StartDistribution,
    ShowRole,
    NextPlayer,
    StartGame,
    CancelDistribution,
    BackToSettings,
    EndTurn,
    ShowResult,
    NewRound,
    GoHome,
}

/// Payload-free discriminant of [`Action`], used to advertise what the UI may offer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    GoToSettings,
    SetPlayerCount,
    SetImpostorCount,
    SetRoundMinutes,
    SetHintEnabled,
    StartDistribution,
    ShowRole,
    NextPlayer,
    StartGame,
    CancelDistribution,
    BackToSettings,
    EndTurn,
    ShowResult,
    NewRound,
    GoHome,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::GoToSettings => ActionKind::GoToSettings,
            Action::SetPlayerCount { .. } => ActionKind::SetPlayerCount,
            Action::SetImpostorCount { .. } => ActionKind::SetImpostorCount,
            Action::SetRoundMinutes { .. } => ActionKind::SetRoundMinutes,
            Action::SetHintEnabled { .. } => ActionKind::SetHintEnabled,
            Action::StartDistribution => ActionKind::StartDistribution,
            Action::ShowRole => ActionKind::ShowRole,
            Action::NextPlayer => ActionKind::NextPlayer,
            Action::StartGame => ActionKind::StartGame,
            Action::CancelDistribution => ActionKind::CancelDistribution,
            Action::BackToSettings => ActionKind::BackToSettings,
            Action::EndTurn => ActionKind::EndTurn,
            Action::ShowResult => ActionKind::ShowResult,
            Action::NewRound => ActionKind::NewRound,
            Action::GoHome => ActionKind::GoHome,
        }
    }
}
