// Public API for integration tests and potential library usage

pub mod api;
pub mod config;
pub mod protocol;
pub mod state;
pub mod theme;
pub mod ticks;
pub mod timer;
pub mod types;
pub mod words;
pub mod ws;

