//! WebSocket message dispatch
//!
//! Entry point for everything the rendering layer sends. Every successful
//! action is broadcast to all connected screens by `AppState::dispatch`,
//! the sender included, so over a socket only failures and explicit view
//! requests get a direct reply (see [`socket_reply`]).

use crate::protocol::{ClientMessage, ServerMessage};
use crate::state::{AppState, SessionError};
use std::sync::Arc;

/// Handle client messages and return optional response
pub async fn handle_message(msg: ClientMessage, state: &Arc<AppState>) -> Option<ServerMessage> {
    match msg {
        ClientMessage::RequestView => Some(ServerMessage::View {
            view: state.view().await,
        }),

        ClientMessage::Dispatch { action } => {
            tracing::info!("Action: {:?}", action);
            match state.dispatch(action).await {
                Ok(view) => Some(ServerMessage::View { view }),
                Err(e) => Some(error_message(e)),
            }
        }
    }
}

/// Reply to send back on the socket the message came in on.
///
/// A successful dispatch returns `None`: the new view already reaches this
/// socket through the broadcast channel.
pub async fn socket_reply(msg: ClientMessage, state: &Arc<AppState>) -> Option<ServerMessage> {
    let is_dispatch = matches!(msg, ClientMessage::Dispatch { .. });
    match handle_message(msg, state).await {
        Some(ServerMessage::View { .. }) if is_dispatch => None,
        reply => reply,
    }
}

fn error_message(e: SessionError) -> ServerMessage {
    let code = match e {
        SessionError::ActionNotAllowed { .. } => "ACTION_NOT_ALLOWED",
    };
    ServerMessage::Error {
        code: code.to_string(),
        msg: e.to_string(),
    }
}
