//! Per-player role reveal during DISTRIBUTION

use super::Session;
use crate::types::*;

impl Round {
    pub fn is_impostor(&self, player: PlayerNumber) -> bool {
        self.impostors.contains(&player)
    }

    /// What `player` is shown. Impostors only get the hint when hints are
    /// enabled and the drawn pair actually has one.
    pub fn role_for(&self, player: PlayerNumber, hint_enabled: bool) -> RoleCard {
        if self.is_impostor(player) {
            let hint = self.word_pair.hint.trim();
            RoleCard::Impostor {
                hint: (hint_enabled && !hint.is_empty()).then(|| hint.to_string()),
            }
        } else {
            RoleCard::Crew {
                word: self.word_pair.word.clone(),
            }
        }
    }

    pub fn result(&self) -> RoundResult {
        RoundResult {
            word: self.word_pair.word.clone(),
            hint: self.word_pair.hint.clone(),
            impostors: self.impostors.iter().copied().collect(),
        }
    }
}

impl Session {
    /// hidden -> revealed for the current player; there is no way back
    pub(super) fn show_role(&mut self) {
        if let Some(round) = self.round.as_mut() {
            round.revealed = true;
            tracing::debug!("Player {} revealed", round.current_player);
        }
    }

    /// Hand the device to the next player
    pub(super) fn next_player(&mut self) {
        let last = self.config.player_count;
        if let Some(round) = self.round.as_mut() {
            if round.revealed && round.current_player < last {
                round.current_player += 1;
                round.revealed = false;
            }
        }
    }

    /// Role of the current player, only while it is on screen
    pub fn current_role(&self) -> Option<RoleCard> {
        if self.phase != GamePhase::Distribution {
            return None;
        }
        self.round
            .as_ref()
            .filter(|r| r.revealed)
            .map(|r| r.role_for(r.current_player, self.config.hint_enabled))
    }
}
