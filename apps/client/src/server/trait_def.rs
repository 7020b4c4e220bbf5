//! Game server trait definition.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Move, MoveOutcome, TargetScore};
use crate::error::ClientError;
use crate::protocol::{MessageResponse, ScoreSnapshot};

/// The external service that owns the authoritative game.
///
/// Implementations perform exactly one request per call and never retry.
/// Inputs arrive already validated; server-side rule violations come back
/// as `ClientError::Server`.
#[async_trait]
pub trait GameServer: Send + Sync {
    /// Begin a game with the player batting.
    async fn start_batting(&self) -> Result<MessageResponse, ClientError>;

    /// Begin a game with the player bowling against `target`.
    async fn start_bowling(&self, target: TargetScore) -> Result<MessageResponse, ClientError>;

    /// Submit one move and decode the server's verdict.
    async fn submit_move(&self, mv: Move) -> Result<MoveOutcome, ClientError>;

    /// Pull the authoritative score.
    async fn fetch_score(&self) -> Result<ScoreSnapshot, ClientError>;
}

#[async_trait]
impl<T: GameServer + ?Sized> GameServer for Arc<T> {
    async fn start_batting(&self) -> Result<MessageResponse, ClientError> {
        (**self).start_batting().await
    }

    async fn start_bowling(&self, target: TargetScore) -> Result<MessageResponse, ClientError> {
        (**self).start_bowling(target).await
    }

    async fn submit_move(&self, mv: Move) -> Result<MoveOutcome, ClientError> {
        (**self).submit_move(mv).await
    }

    async fn fetch_score(&self) -> Result<ScoreSnapshot, ClientError> {
        (**self).fetch_score().await
    }
}
