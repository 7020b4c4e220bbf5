//! Wire types exchanged with the game server.

pub mod game_state;

pub use game_state::{ErrorBody, MessageResponse, MoveRequest, ScoreSnapshot, StartBowlingRequest};
