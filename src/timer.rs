//! Real-time countdown backed by the tokio runtime

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::state::{Scheduler, TimerHandle};
use crate::types::RoundId;

/// Spawns one interval task per countdown. Each tick sends the round id
/// down a channel; `ticks::spawn_tick_pump` feeds them back into the session.
pub struct TokioScheduler {
    ticks: mpsc::UnboundedSender<RoundId>,
}

impl TokioScheduler {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<RoundId>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { ticks: tx }, rx)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, round_id: RoundId, period: Duration) -> Box<dyn TimerHandle> {
        let ticks = self.ticks.clone();
        let task = tokio::spawn(async move {
            // First tick one period from now, not immediately
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if ticks.send(round_id.clone()).is_err() {
                    tracing::debug!("Tick receiver gone, stopping countdown task");
                    break;
                }
            }
        });

        Box::new(TokioTimerHandle { task })
    }
}

struct TokioTimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle for TokioTimerHandle {
    fn cancel(&mut self) {
        // Aborting a finished or already aborted task is a no-op
        self.task.abort();
    }
}

impl Drop for TokioTimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
