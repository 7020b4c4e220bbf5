//! Domain layer: the client-side session mirror and its rules.

pub mod mode;
pub mod moves;
pub mod outcome;
pub mod session;

// Re-exports for ergonomics
pub use mode::Mode;
pub use moves::{Move, TargetScore, MOVE_RANGE};
pub use outcome::MoveOutcome;
pub use session::{GameSession, STARTING_WICKETS, WELCOME_MESSAGE};
