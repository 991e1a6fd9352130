use crate::state::AppState;
use crate::types::RoundId;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Spawn a background task that feeds countdown ticks into the session.
///
/// Each tick takes the session write lock like any other trigger, so it can
/// never interleave with a player action. Ticks for a round that has been
/// replaced or discarded are dropped by the session itself.
pub fn spawn_tick_pump(
    state: Arc<AppState>,
    mut ticks: mpsc::UnboundedReceiver<RoundId>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(round_id) = ticks.recv().await {
            state.tick(&round_id).await;
        }
        tracing::debug!("Tick channel closed, pump exiting");
    })
}
