use super::Session;
use crate::types::*;

impl Session {
    /// Actions the current state accepts.
    ///
    /// This is the single transition table of the session: `dispatch`
    /// rejects anything not listed here, and the view hands the same list to
    /// the UI so it can disable everything else.
    pub fn available_actions(&self) -> Vec<ActionKind> {
        use ActionKind::*;

        match self.phase {
            GamePhase::Rules => vec![GoToSettings],
            GamePhase::Settings => {
                let mut actions = vec![
                    SetPlayerCount,
                    SetImpostorCount,
                    SetRoundMinutes,
                    SetHintEnabled,
                ];
                if !self.is_config_invalid() {
                    actions.push(StartDistribution);
                }
                actions.push(GoHome);
                actions
            }
            GamePhase::Distribution => match &self.round {
                Some(round) if !round.revealed => vec![ShowRole, CancelDistribution, GoHome],
                Some(round) if round.current_player < self.config.player_count => {
                    vec![NextPlayer, GoHome]
                }
                Some(_) => vec![StartGame, GoHome],
                None => vec![GoHome],
            },
            GamePhase::Playing => vec![EndTurn, BackToSettings, GoHome],
            GamePhase::EndTurn => vec![ShowResult, BackToSettings, GoHome],
            GamePhase::Result => vec![NewRound, GoHome],
        }
    }

    pub(super) fn enter_phase(&mut self, phase: GamePhase) {
        tracing::info!("Phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
    }

    /// SETTINGS -> DISTRIBUTION, or RESULT -> DISTRIBUTION for a new round
    pub(super) fn begin_distribution(&mut self) {
        self.start_round();
        self.enter_phase(GamePhase::Distribution);
    }

    /// Last player has seen their role: start the countdown
    pub(super) fn start_game(&mut self) {
        self.enter_phase(GamePhase::Playing);
        self.start_timer();
    }

    /// Manual early end of the discussion
    pub(super) fn end_turn(&mut self) {
        self.stop_timer();
        self.enter_phase(GamePhase::EndTurn);
    }

    /// Abort the round and navigate away
    pub(super) fn discard_round(&mut self, to: GamePhase) {
        self.stop_timer();
        if let Some(round) = self.round.take() {
            tracing::info!("Discarding round {} ({})", round.number, round.id);
        }
        self.enter_phase(to);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use crate::types::*;

    #[test]
    fn test_forward_flow_through_all_phases() {
        let config = GameConfig {
            player_count: 3,
            ..GameConfig::default()
        };
        let (mut session, _) = playing(config);
        assert_eq!(session.phase(), GamePhase::Playing);

        session.dispatch(Action::EndTurn).unwrap();
        assert_eq!(session.phase(), GamePhase::EndTurn);

        session.dispatch(Action::ShowResult).unwrap();
        assert_eq!(session.phase(), GamePhase::Result);

        session.dispatch(Action::NewRound).unwrap();
        assert_eq!(session.phase(), GamePhase::Distribution);
        assert_eq!(session.round().unwrap().number, 2);
    }

    #[test]
    fn test_rules_only_advances_to_settings() {
        let (mut session, _) = session();
        assert_eq!(session.available_actions(), vec![ActionKind::GoToSettings]);

        for action in [
            Action::StartDistribution,
            Action::StartGame,
            Action::EndTurn,
            Action::ShowResult,
            Action::NewRound,
            Action::GoHome,
        ] {
            assert!(session.dispatch(action).is_err());
        }
        assert_eq!(session.phase(), GamePhase::Rules);
    }

    #[test]
    fn test_settings_back_to_rules() {
        let (mut session, _) = session();
        session.dispatch(Action::GoToSettings).unwrap();
        session.dispatch(Action::GoHome).unwrap();
        assert_eq!(session.phase(), GamePhase::Rules);
    }

    #[test]
    fn test_invalid_config_blocks_start() {
        let config = GameConfig {
            player_count: 4,
            impostor_count: 1,
            ..GameConfig::default()
        };
        let (mut session, _) = session_with(config, crate::words::WordList::default());
        session.dispatch(Action::GoToSettings).unwrap();

        // Only reachable by bypassing the clamping setters
        session.config.impostor_count = 3;
        assert!(session.is_config_invalid());
        assert!(!session
            .available_actions()
            .contains(&ActionKind::StartDistribution));

        let result = session.dispatch(Action::StartDistribution);
        assert!(result.is_err());
        assert_eq!(session.phase(), GamePhase::Settings);
        assert!(session.round().is_none());
    }

    #[test]
    fn test_cancel_distribution_discards_round() {
        let (mut session, _) = distributing(GameConfig::default());
        session.dispatch(Action::CancelDistribution).unwrap();

        assert_eq!(session.phase(), GamePhase::Settings);
        assert!(session.round().is_none());
    }

    #[test]
    fn test_cancel_not_offered_once_revealed() {
        let (mut session, _) = distributing(GameConfig::default());
        session.dispatch(Action::ShowRole).unwrap();
        assert!(session.dispatch(Action::CancelDistribution).is_err());
    }

    #[test]
    fn test_back_to_settings_while_playing_stops_countdown() {
        let (mut session, scheduler) = playing(GameConfig::default());
        let stale_id = session.round().unwrap().id.clone();
        session.tick(&stale_id);

        session.dispatch(Action::BackToSettings).unwrap();
        assert_eq!(session.phase(), GamePhase::Settings);
        assert!(session.round().is_none());
        assert!(!session.is_timer_running());
        assert!(scheduler.active_round().is_none());
        assert_eq!(scheduler.cancelled(), 1);

        // A tick already in flight for the discarded round changes nothing
        assert!(!session.tick(&stale_id));
        assert_eq!(session.phase(), GamePhase::Settings);
        assert!(session.round().is_none());

        // Settings are editable again
        session
            .dispatch(Action::SetRoundMinutes { minutes: 5 })
            .unwrap();
        assert_eq!(session.config().round_minutes, 5);
    }

    #[test]
    fn test_back_to_settings_after_end_turn() {
        let (mut session, scheduler) = playing(GameConfig::default());
        let stale_id = session.round().unwrap().id.clone();
        session.dispatch(Action::EndTurn).unwrap();
        assert_eq!(
            session.available_actions(),
            vec![
                ActionKind::ShowResult,
                ActionKind::BackToSettings,
                ActionKind::GoHome
            ]
        );

        session.dispatch(Action::BackToSettings).unwrap();
        assert_eq!(session.phase(), GamePhase::Settings);
        assert!(session.round().is_none());
        assert!(scheduler.active_round().is_none());
        assert!(!session.tick(&stale_id));
        assert_eq!(session.phase(), GamePhase::Settings);
    }

    #[test]
    fn test_back_to_settings_not_offered_elsewhere() {
        let (mut session, _) = distributing(GameConfig::default());
        assert!(session.dispatch(Action::BackToSettings).is_err());

        let (mut session, _) = playing(GameConfig::default());
        session.dispatch(Action::EndTurn).unwrap();
        session.dispatch(Action::ShowResult).unwrap();
        assert!(session.dispatch(Action::BackToSettings).is_err());
        assert_eq!(session.phase(), GamePhase::Result);
    }

    #[test]
    fn test_go_home_from_every_phase_discards_round() {
        let phases_to_abort: [fn(&mut super::Session); 3] = [
            |_| {},
            |s| {
                s.dispatch(Action::EndTurn).unwrap();
            },
            |s| {
                s.dispatch(Action::EndTurn).unwrap();
                s.dispatch(Action::ShowResult).unwrap();
            },
        ];

        for advance in phases_to_abort {
            let (mut session, scheduler) = playing(GameConfig::default());
            advance(&mut session);

            session.dispatch(Action::GoHome).unwrap();
            assert_eq!(session.phase(), GamePhase::Rules);
            assert!(session.round().is_none());
            assert!(!session.is_timer_running());
            assert!(scheduler.active_round().is_none());
        }
    }

    #[test]
    fn test_new_round_replaces_round() {
        let (mut session, _) = playing(GameConfig::default());
        let first_id = session.round().unwrap().id.clone();

        session.dispatch(Action::EndTurn).unwrap();
        session.dispatch(Action::ShowResult).unwrap();
        session.dispatch(Action::NewRound).unwrap();

        let round = session.round().unwrap();
        assert_ne!(round.id, first_id);
        assert_eq!(round.current_player, 1);
        assert!(!round.revealed);
        assert!(round.remaining_seconds.is_none());
    }
}
