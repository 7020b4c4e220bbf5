use std::fmt;
use std::str::FromStr;

use crate::error::ClientError;

/// Path spelling used by the game server for the start endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointContract {
    /// `/start_batting`, `/start_bowling`
    #[default]
    Underscore,
    /// `/start/batting`, `/start/bowling`
    Slash,
}

impl EndpointContract {
    pub fn start_batting(self) -> &'static str {
        match self {
            EndpointContract::Underscore => "/start_batting",
            EndpointContract::Slash => "/start/batting",
        }
    }

    pub fn start_bowling(self) -> &'static str {
        match self {
            EndpointContract::Underscore => "/start_bowling",
            EndpointContract::Slash => "/start/bowling",
        }
    }

    pub fn submit_move(self) -> &'static str {
        "/move"
    }

    pub fn score(self) -> &'static str {
        "/score"
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EndpointContract::Underscore => "underscore",
            EndpointContract::Slash => "slash",
        }
    }
}

impl fmt::Display for EndpointContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointContract {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "underscore" => Ok(EndpointContract::Underscore),
            "slash" => Ok(EndpointContract::Slash),
            other => Err(ClientError::config(format!(
                "unknown endpoint contract '{other}' (expected 'underscore' or 'slash')"
            ))),
        }
    }
}
