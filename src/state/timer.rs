//! Countdown timer
//!
//! The session never sleeps itself. It asks a [`Scheduler`] for a repeating
//! one-second tick tagged with the round id and gets back a cancellable
//! [`TimerHandle`]. Ticks come back in through [`Session::tick`]. The server
//! uses a tokio-backed scheduler (`crate::timer::TokioScheduler`); tests use
//! [`ManualScheduler`] and call `tick` themselves.

use super::Session;
use crate::types::*;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

/// Countdown resolution
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Source of repeating countdown ticks
pub trait Scheduler: Send + Sync {
    /// Start ticking every `period` on behalf of `round_id`
    fn schedule(&self, round_id: RoundId, period: Duration) -> Box<dyn TimerHandle>;
}

/// A running repeating tick. Cancelling twice is a no-op.
pub trait TimerHandle: Send + Sync {
    fn cancel(&mut self);
}

/// `125` -> `"02:05"`
pub fn format_mm_ss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

impl Session {
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Reset the countdown and (re)start ticking. Any previous timer is cancelled first.
    pub(super) fn start_timer(&mut self) {
        self.stop_timer();

        let Some(round) = self.round.as_mut() else {
            return;
        };
        let seconds = self.config.round_seconds();
        round.remaining_seconds = Some(seconds);
        self.timer = Some(self.scheduler.schedule(round.id.clone(), TICK_PERIOD));

        tracing::info!("Countdown started: {} for round {}", format_mm_ss(seconds), round.id);
    }

    /// Idempotent: safe to call with no timer running
    pub fn stop_timer(&mut self) {
        if let Some(mut handle) = self.timer.take() {
            handle.cancel();
            tracing::debug!("Countdown stopped");
        }
    }

    /// One countdown second elapsed for `round_id`.
    ///
    /// Returns whether the session changed. Ticks for a replaced or
    /// discarded round, or arriving after the timer stopped, are dropped.
    pub fn tick(&mut self, round_id: &str) -> bool {
        if self.phase != GamePhase::Playing || self.timer.is_none() {
            tracing::debug!("Ignoring tick for {}: no countdown running", round_id);
            return false;
        }
        let Some(round) = self.round.as_mut().filter(|r| r.id == round_id) else {
            tracing::debug!("Ignoring stale tick for {}", round_id);
            return false;
        };

        let remaining = round.remaining_seconds.unwrap_or(0).saturating_sub(1);
        round.remaining_seconds = Some(remaining);
        tracing::debug!("Tick: {} left", format_mm_ss(remaining));

        if remaining == 0 {
            self.stop_timer();
            self.enter_phase(GamePhase::EndTurn);
        }
        true
    }
}

#[derive(Debug, Default)]
struct ManualTimers {
    started: u32,
    cancelled: u32,
    active: Option<RoundId>,
}

/// Scheduler that never fires on its own; tests deliver ticks by hand.
///
/// Not used by the server. It is public so that `tests/` and embedders can
/// drive a [`Session`] deterministically: read [`active_round`] and pass it
/// to [`Session::tick`] (or `AppState::tick`) once per simulated second.
///
/// [`active_round`]: ManualScheduler::active_round
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    timers: Arc<Mutex<ManualTimers>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Round id of the timer currently running, if any
    pub fn active_round(&self) -> Option<RoundId> {
        self.timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .active
            .clone()
    }

    pub fn started(&self) -> u32 {
        self.timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .started
    }

    pub fn cancelled(&self) -> u32 {
        self.timers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, round_id: RoundId, _period: Duration) -> Box<dyn TimerHandle> {
        let mut timers = self.timers.lock().unwrap_or_else(PoisonError::into_inner);
        timers.started += 1;
        timers.active = Some(round_id.clone());

        Box::new(ManualHandle {
            timers: self.timers.clone(),
            round_id,
            cancelled: false,
        })
    }
}

struct ManualHandle {
    timers: Arc<Mutex<ManualTimers>>,
    round_id: RoundId,
    cancelled: bool,
}

impl TimerHandle for ManualHandle {
    fn cancel(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;

        let mut timers = self.timers.lock().unwrap_or_else(PoisonError::into_inner);
        timers.cancelled += 1;
        if timers.active.as_ref() == Some(&self.round_id) {
            timers.active = None;
        }
    }
}
