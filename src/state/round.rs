use super::Session;
use crate::types::*;
use rand::Rng;
use std::collections::BTreeSet;

/// Draw `count` distinct player numbers from `1..=player_count`.
///
/// Rejection sampling into a set: only cheap because the impostor ceiling
/// keeps `count` at or below a third of the table (at most 3 of 20). Not
/// suitable for `count` close to `player_count`.
pub fn sample_impostors<R: Rng>(
    rng: &mut R,
    player_count: u32,
    count: u32,
) -> BTreeSet<PlayerNumber> {
    debug_assert!(count <= player_count, "cannot draw {count} of {player_count}");

    let mut impostors = BTreeSet::new();
    while (impostors.len() as u32) < count {
        impostors.insert(rng.random_range(1..=player_count));
    }
    impostors
}

impl Session {
    /// Build a fresh round from the current configuration and replace the old one
    pub(super) fn start_round(&mut self) {
        // Never let a tick from the previous round land on the new one
        self.stop_timer();
        self.config.normalize();

        let word_pair = self.words.draw(&mut self.rng);
        let impostors = sample_impostors(
            &mut self.rng,
            self.config.player_count,
            self.config.impostor_count,
        );

        self.rounds_played += 1;
        let round = Round {
            id: ulid::Ulid::new().to_string(),
            number: self.rounds_played,
            word_pair,
            impostors,
            current_player: 1,
            revealed: false,
            remaining_seconds: None,
        };

        tracing::info!(
            "Starting round {} ({}) with {} players, {} impostor(s)",
            round.number,
            round.id,
            self.config.player_count,
            round.impostors.len()
        );
        self.round = Some(round);
    }
}
