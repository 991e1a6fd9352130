//! Configuration clamping and the impostor ceiling

use crate::types::*;

/// Highest impostor count allowed for a table of `player_count`.
///
/// Roughly one third of the table (rounded down), never more than the hard
/// cap of 3, always leaving at least one crew member, and never below 1.
pub fn max_allowed(player_count: u32) -> u32 {
    let third = player_count / 3;
    let keep_one_crew = player_count.saturating_sub(1);
    MAX_IMPOSTORS.min(third).min(keep_one_crew).max(MIN_IMPOSTORS)
}

impl GameConfig {
    /// Clamp to [3, 20] and pull `impostor_count` back under the new ceiling
    pub fn set_player_count(&mut self, count: u32) {
        self.player_count = count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self.normalize();
    }

    pub fn set_impostor_count(&mut self, count: u32) {
        self.impostor_count = count
            .clamp(MIN_IMPOSTORS, MAX_IMPOSTORS)
            .min(max_allowed(self.player_count));
    }

    pub fn set_round_minutes(&mut self, minutes: u32) {
        self.round_minutes = minutes.clamp(MIN_ROUND_MINUTES, MAX_ROUND_MINUTES);
    }

    pub fn set_hint_enabled(&mut self, enabled: bool) {
        self.hint_enabled = enabled;
    }

    pub fn max_impostors(&self) -> u32 {
        max_allowed(self.player_count)
    }

    /// True while `impostor_count` sits above its ceiling. Gates the start of a round.
    pub fn is_invalid(&self) -> bool {
        self.impostor_count > self.max_impostors()
    }

    /// Bring every field back into its domain. Idempotent.
    pub fn normalize(&mut self) {
        self.player_count = self.player_count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self.round_minutes = self
            .round_minutes
            .clamp(MIN_ROUND_MINUTES, MAX_ROUND_MINUTES);
        self.set_impostor_count(self.impostor_count);
    }

    /// Countdown length in seconds
    pub fn round_seconds(&self) -> u32 {
        self.round_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_allowed_examples() {
        assert_eq!(max_allowed(3), 1);
        assert_eq!(max_allowed(5), 1);
        assert_eq!(max_allowed(6), 2);
        assert_eq!(max_allowed(8), 2);
        assert_eq!(max_allowed(9), 3);
        assert_eq!(max_allowed(20), 3);
    }

    #[test]
    fn test_max_allowed_matches_formula_over_domain() {
        for p in MIN_PLAYERS..=MAX_PLAYERS {
            let expected = 1u32.max(3u32.min(p / 3).min(p - 1));
            assert_eq!(max_allowed(p), expected, "player_count={}", p);
        }
    }

    #[test]
    fn test_set_player_count_clamps() {
        let mut config = GameConfig::default();

        config.set_player_count(1);
        assert_eq!(config.player_count, 3);

        config.set_player_count(99);
        assert_eq!(config.player_count, 20);
    }

    #[test]
    fn test_reducing_players_reduces_impostors() {
        let mut config = GameConfig::default();
        config.set_player_count(12);
        config.set_impostor_count(3);
        assert_eq!(config.impostor_count, 3);

        config.set_player_count(7);
        assert_eq!(config.impostor_count, 2);

        config.set_player_count(4);
        assert_eq!(config.impostor_count, 1);
        assert!(!config.is_invalid());
    }

    #[test]
    fn test_set_impostor_count_respects_ceiling() {
        let mut config = GameConfig::default();
        config.set_player_count(6);

        config.set_impostor_count(0);
        assert_eq!(config.impostor_count, 1);

        config.set_impostor_count(3);
        assert_eq!(config.impostor_count, 2);

        config.set_player_count(20);
        config.set_impostor_count(10);
        assert_eq!(config.impostor_count, 3);
    }

    #[test]
    fn test_round_minutes_clamped() {
        let mut config = GameConfig::default();
        config.set_round_minutes(0);
        assert_eq!(config.round_minutes, 1);
        config.set_round_minutes(61);
        assert_eq!(config.round_minutes, 60);
        config.set_round_minutes(3);
        assert_eq!(config.round_seconds(), 180);
    }

    #[test]
    fn test_hint_flag_stored_verbatim() {
        let mut config = GameConfig::default();
        assert!(config.hint_enabled);
        config.set_hint_enabled(false);
        assert!(!config.hint_enabled);
    }

    #[test]
    fn test_invariant_holds_after_arbitrary_edits() {
        let mut config = GameConfig::default();
        let edits: [(bool, u32); 12] = [
            (true, 20),
            (false, 3),
            (true, 5),
            (false, 3),
            (true, 9),
            (false, 7),
            (true, 3),
            (false, 2),
            (true, 0),
            (false, 3),
            (true, 14),
            (false, 1),
        ];

        for (is_players, n) in edits {
            if is_players {
                config.set_player_count(n);
            } else {
                config.set_impostor_count(n);
            }
            assert!(config.impostor_count <= max_allowed(config.player_count));
            assert!(!config.is_invalid());
        }
    }

    #[test]
    fn test_deserialized_config_can_be_invalid_until_normalized() {
        let mut config: GameConfig = serde_json::from_str(
            r#"{"player_count":4,"impostor_count":3,"round_minutes":90,"hint_enabled":false}"#,
        )
        .unwrap();
        assert!(config.is_invalid());

        config.normalize();
        assert!(!config.is_invalid());
        assert_eq!(config.impostor_count, 1);
        assert_eq!(config.round_minutes, 60);

        let snapshot = config.clone();
        config.normalize();
        assert_eq!(config, snapshot);
    }
}
