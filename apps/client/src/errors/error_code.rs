//! Error codes for the hand cricket client.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in logs.

use core::fmt;

/// Centralized error codes for the hand cricket client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Client-side validation
    /// Target score missing or below 1
    InvalidTargetScore,
    /// Move outside 1..=6
    InvalidMove,
    /// Move attempted with no active game
    GameNotActive,
    /// Start attempted while a game is in progress
    GameInProgress,
    /// Start attempted after the game finished
    GameFinished,

    // Transport
    /// Connection, DNS, or protocol failure
    TransportError,
    /// Request exceeded the configured timeout
    Timeout,

    // Server-reported
    /// Server rejected the request (4xx)
    ServerRejected,
    /// Server failed to handle the request (5xx or unexpected status)
    ServerError,
    /// Response body did not match the expected shape
    DecodeError,

    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidTargetScore => "INVALID_TARGET_SCORE",
            Self::InvalidMove => "INVALID_MOVE",
            Self::GameNotActive => "GAME_NOT_ACTIVE",
            Self::GameInProgress => "GAME_IN_PROGRESS",
            Self::GameFinished => "GAME_FINISHED",

            Self::TransportError => "TRANSPORT_ERROR",
            Self::Timeout => "TIMEOUT",

            Self::ServerRejected => "SERVER_REJECTED",
            Self::ServerError => "SERVER_ERROR",
            Self::DecodeError => "DECODE_ERROR",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// True for codes raised before any request leaves the client.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidTargetScore
                | Self::InvalidMove
                | Self::GameNotActive
                | Self::GameInProgress
                | Self::GameFinished
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
