use crate::state::SessionView;
use crate::types::*;
use serde::{Deserialize, Serialize};

pub const PROTOCOL_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ask for the current view without changing anything (e.g. after reconnect)
    RequestView,
    /// Anything that moves the session forward
    Dispatch { action: Action },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        protocol: String,
        view: SessionView,
        /// True when the word list failed to load and the fallback pair is in use
        dataset_degraded: bool,
        server_now: String,
    },
    View {
        view: SessionView,
    },
    Error {
        code: String,
        msg: String,
    },
}
