use std::fmt;

use crate::error::ClientError;
use crate::errors::ErrorCode;

/// Client session phase.
///
/// Transitions: `Unset -> Batting | Bowling` on a successful start,
/// `Batting | Bowling -> GameOver` on a Lost/Won move. Nothing leaves
/// `GameOver`; a fresh view is required to play again.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Mode {
    /// No game started yet.
    #[default]
    Unset,
    /// The player bats; the server's bowler tries to get them out.
    Batting,
    /// The player bowls against a target score.
    Bowling,
    /// The server reported Lost or Won.
    GameOver,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Unset => "unset",
            Mode::Batting => "batting",
            Mode::Bowling => "bowling",
            Mode::GameOver => "game-over",
        }
    }

    /// True while moves may be submitted.
    pub fn is_playing(self) -> bool {
        matches!(self, Mode::Batting | Mode::Bowling)
    }

    /// Check that a new game may begin from this phase.
    pub fn ensure_can_start(self) -> Result<(), ClientError> {
        match self {
            Mode::Unset => Ok(()),
            Mode::Batting | Mode::Bowling => Err(ClientError::validation(
                ErrorCode::GameInProgress,
                "A game is already in progress.",
            )),
            Mode::GameOver => Err(ClientError::validation(
                ErrorCode::GameFinished,
                "Game over. Start a new session to play again.",
            )),
        }
    }

    /// Parse the mode string reported by the score endpoint.
    pub fn from_server(raw: &str) -> Option<Mode> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "batting" => Some(Mode::Batting),
            "bowling" => Some(Mode::Bowling),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
