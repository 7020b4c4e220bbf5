use std::ops::RangeInclusive;

use crate::error::ClientError;
use crate::errors::ErrorCode;

/// Finger counts a player may show on a turn.
pub const MOVE_RANGE: RangeInclusive<u8> = 1..=6;

pub const INVALID_TARGET_MESSAGE: &str = "Please enter a valid target score.";
pub const INVALID_MOVE_MESSAGE: &str = "Move must be between 1 and 6.";

/// A single hand-cricket move, always within `MOVE_RANGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(u8);

impl Move {
    pub fn new(value: i64) -> Result<Self, ClientError> {
        u8::try_from(value)
            .ok()
            .filter(|v| MOVE_RANGE.contains(v))
            .map(Move)
            .ok_or_else(|| ClientError::validation(ErrorCode::InvalidMove, INVALID_MOVE_MESSAGE))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every legal move in ascending order.
    pub fn all() -> impl Iterator<Item = Move> {
        MOVE_RANGE.map(Move)
    }
}

impl TryFrom<i64> for Move {
    type Error = ClientError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Move::new(value)
    }
}

/// Runs the computer must reach when the player bowls; at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetScore(u32);

impl TargetScore {
    pub fn new(value: i64) -> Result<Self, ClientError> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v >= 1)
            .map(TargetScore)
            .ok_or_else(|| {
                ClientError::validation(ErrorCode::InvalidTargetScore, INVALID_TARGET_MESSAGE)
            })
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for TargetScore {
    type Error = ClientError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        TargetScore::new(value)
    }
}
