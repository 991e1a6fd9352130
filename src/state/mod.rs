pub mod config;
mod game;
mod reveal;
mod round;
pub mod timer;
mod view;

pub use config::max_allowed;
pub use round::sample_impostors;
pub use timer::{format_mm_ss, ManualScheduler, Scheduler, TimerHandle, TICK_PERIOD};
pub use view::SessionView;

use crate::protocol::ServerMessage;
use crate::theme::ThemeStore;
use crate::types::*;
use crate::words::WordList;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

/// Errors returned by [`Session::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Action {action:?} is not allowed in phase {phase:?}")]
    ActionNotAllowed { action: ActionKind, phase: GamePhase },
}

/// The game session controller.
///
/// Owns the configuration, the current round (if any), the word list, the
/// random source and the countdown timer. Every mutation goes through
/// [`Session::dispatch`] or [`Session::tick`] and runs to completion before
/// the next one.
pub struct Session {
    phase: GamePhase,
    config: GameConfig,
    round: Option<Round>,
    rounds_played: u32,
    words: WordList,
    rng: StdRng,
    scheduler: Box<dyn Scheduler>,
    /// At most one live timer per session
    timer: Option<Box<dyn TimerHandle>>,
}

impl Session {
    pub fn new(
        mut config: GameConfig,
        words: WordList,
        scheduler: Box<dyn Scheduler>,
        rng: StdRng,
    ) -> Self {
        config.normalize();
        Self {
            phase: GamePhase::Rules,
            config,
            round: None,
            rounds_played: 0,
            words,
            rng,
            scheduler,
            timer: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn is_config_invalid(&self) -> bool {
        self.config.is_invalid()
    }

    /// Apply one player action. Rejected actions leave the session untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<(), SessionError> {
        let kind = action.kind();
        if !self.available_actions().contains(&kind) {
            tracing::warn!("Rejected {:?} in phase {:?}", kind, self.phase);
            return Err(SessionError::ActionNotAllowed {
                action: kind,
                phase: self.phase,
            });
        }

        match action {
            Action::GoToSettings => self.enter_phase(GamePhase::Settings),
            Action::SetPlayerCount { count } => self.config.set_player_count(count),
            Action::SetImpostorCount { count } => self.config.set_impostor_count(count),
            Action::SetRoundMinutes { minutes } => self.config.set_round_minutes(minutes),
            Action::SetHintEnabled { enabled } => self.config.set_hint_enabled(enabled),
            Action::StartDistribution | Action::NewRound => self.begin_distribution(),
            Action::ShowRole => self.show_role(),
            Action::NextPlayer => self.next_player(),
            Action::StartGame => self.start_game(),
            Action::CancelDistribution | Action::BackToSettings => {
                self.discard_round(GamePhase::Settings)
            }
            Action::EndTurn => self.end_turn(),
            Action::ShowResult => self.enter_phase(GamePhase::Result),
            Action::GoHome => self.discard_round(GamePhase::Rules),
        }

        Ok(())
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub theme: Arc<RwLock<ThemeStore>>,
    /// Broadcast channel for pushing fresh views to every connected screen
    pub broadcast: broadcast::Sender<ServerMessage>,
}

impl AppState {
    pub fn new(session: Session, theme: ThemeStore) -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self {
            session: Arc::new(RwLock::new(session)),
            theme: Arc::new(RwLock::new(theme)),
            broadcast: tx,
        }
    }

    pub async fn view(&self) -> SessionView {
        self.session.read().await.view()
    }

    pub async fn dataset_degraded(&self) -> bool {
        self.session.read().await.words().is_degraded()
    }

    /// Dispatch an action and push the resulting view to all clients
    pub async fn dispatch(&self, action: Action) -> Result<SessionView, SessionError> {
        let view = {
            let mut session = self.session.write().await;
            session.dispatch(action)?;
            session.view()
        };

        self.broadcast_to_all(ServerMessage::View { view: view.clone() });
        Ok(view)
    }

    /// Feed one countdown tick into the session
    pub async fn tick(&self, round_id: &str) {
        let view = {
            let mut session = self.session.write().await;
            if !session.tick(round_id) {
                return;
            }
            session.view()
        };

        self.broadcast_to_all(ServerMessage::View { view });
    }

    pub fn broadcast_to_all(&self, msg: ServerMessage) {
        // No receivers connected is fine
        let _ = self.broadcast.send(msg);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use rand::SeedableRng;

    pub fn session_with(config: GameConfig, words: WordList) -> (Session, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let session = Session::new(
            config,
            words,
            Box::new(scheduler.clone()),
            StdRng::seed_from_u64(7),
        );
        (session, scheduler)
    }

    pub fn session() -> (Session, ManualScheduler) {
        session_with(GameConfig::default(), WordList::default())
    }

    /// Drive a fresh session into DISTRIBUTION
    pub fn distributing(config: GameConfig) -> (Session, ManualScheduler) {
        let (mut session, scheduler) = session_with(config, WordList::default());
        session.dispatch(Action::GoToSettings).unwrap();
        session.dispatch(Action::StartDistribution).unwrap();
        (session, scheduler)
    }

    /// Reveal every player and start the countdown
    pub fn playing(config: GameConfig) -> (Session, ManualScheduler) {
        let (mut session, scheduler) = distributing(config);
        let players = session.config().player_count;
        for _ in 1..players {
            session.dispatch(Action::ShowRole).unwrap();
            session.dispatch(Action::NextPlayer).unwrap();
        }
        session.dispatch(Action::ShowRole).unwrap();
        session.dispatch(Action::StartGame).unwrap();
        (session, scheduler)
    }
}
