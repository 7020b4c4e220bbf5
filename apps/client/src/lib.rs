#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod input;
pub mod protocol;
pub mod server;
pub mod view;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::ClientConfig;
pub use domain::{GameSession, Mode, Move, MoveOutcome, TargetScore};
pub use error::ClientError;
pub use errors::ErrorCode;
pub use input::Command;
pub use protocol::{MessageResponse, ScoreSnapshot};
pub use reqwest::StatusCode;
pub use server::{EndpointContract, GameServer, HttpGameServer};
pub use view::{GameView, Screen};

// Prelude for test convenience
pub mod prelude {
    pub use super::config::*;
    pub use super::domain::*;
    pub use super::error::*;
    pub use super::errors::*;
    pub use super::protocol::*;
    pub use super::server::*;
    pub use super::view::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
