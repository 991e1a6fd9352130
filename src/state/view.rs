use super::timer::format_mm_ss;
use super::Session;
use crate::types::*;
use serde::{Deserialize, Serialize};

/// Everything the rendering layer needs to draw the current screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionView {
    pub phase: GamePhase,
    pub config: GameConfig,
    pub max_impostors: u32,
    pub is_config_invalid: bool,
    /// Number of rounds started in this session (0 before the first)
    pub round_no: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_player: Option<PlayerNumber>,
    pub revealed: bool,
    pub is_last_player: bool,
    /// Only present while the current player's role is on screen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RoleCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_label: Option<String>,
    pub timer_running: bool,
    /// Only present on the RESULT screen
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RoundResult>,
    pub available_actions: Vec<ActionKind>,
}

impl Session {
    pub fn view(&self) -> SessionView {
        let round = self.round.as_ref();
        let in_distribution = self.phase == GamePhase::Distribution;
        let remaining_seconds = round.and_then(|r| r.remaining_seconds);

        SessionView {
            phase: self.phase,
            config: self.config.clone(),
            max_impostors: self.config.max_impostors(),
            is_config_invalid: self.is_config_invalid(),
            round_no: self.rounds_played,
            current_player: round
                .filter(|_| in_distribution)
                .map(|r| r.current_player),
            revealed: in_distribution && round.is_some_and(|r| r.revealed),
            is_last_player: in_distribution
                && round.is_some_and(|r| r.current_player == self.config.player_count),
            role: self.current_role(),
            remaining_seconds,
            remaining_label: remaining_seconds.map(format_mm_ss),
            timer_running: self.is_timer_running(),
            result: round
                .filter(|_| self.phase == GamePhase::Result)
                .map(|r| r.result()),
            available_actions: self.available_actions(),
        }
    }
}
