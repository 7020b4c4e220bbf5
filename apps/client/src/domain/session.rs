use tracing::warn;

use crate::domain::mode::Mode;
use crate::domain::moves::TargetScore;
use crate::domain::outcome::MoveOutcome;
use crate::protocol::ScoreSnapshot;

pub const STARTING_WICKETS: u8 = 5;
pub const WELCOME_MESSAGE: &str = "Welcome! Choose a mode to start.";

/// Client-local mirror of the game the server is running.
///
/// Every mutation goes through the methods below so the invariants hold:
/// wickets never go negative, and the mode only moves forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    mode: Mode,
    runs: u32,
    wickets: u8,
    target: Option<TargetScore>,
    message: String,
    active: bool,
    /// Last snapshot pulled from the score endpoint.
    server_score: Option<ScoreSnapshot>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            mode: Mode::Unset,
            runs: 0,
            wickets: STARTING_WICKETS,
            target: None,
            message: WELCOME_MESSAGE.to_string(),
            active: false,
            server_score: None,
        }
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn wickets(&self) -> u8 {
        self.wickets
    }

    pub fn target(&self) -> Option<TargetScore> {
        self.target
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn server_score(&self) -> Option<&ScoreSnapshot> {
        self.server_score.as_ref()
    }

    pub(crate) fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Enter a freshly started game with reset counters.
    pub(crate) fn begin(&mut self, mode: Mode, target: Option<TargetScore>) {
        debug_assert!(mode.is_playing());
        self.mode = mode;
        self.runs = 0;
        self.wickets = STARTING_WICKETS;
        self.target = target;
        self.active = true;
    }

    /// Fold one move outcome into the counters.
    pub(crate) fn apply_outcome(&mut self, outcome: &MoveOutcome) {
        match outcome {
            MoveOutcome::Out => self.wickets = self.wickets.saturating_sub(1),
            MoveOutcome::Lost | MoveOutcome::Won => {
                self.active = false;
                self.mode = Mode::GameOver;
            }
            MoveOutcome::Scored(runs) => self.runs = self.runs.saturating_add(*runs),
            MoveOutcome::Unrecognized(_) => {}
        }
    }

    /// Overwrite the mirror with the server's authoritative score.
    ///
    /// A finished session stays finished. An unset session adopts a game
    /// the server reports as in progress. A game in progress keeps its mode;
    /// a snapshot reporting the other mode only updates `server_score`.
    pub(crate) fn apply_snapshot(&mut self, snapshot: &ScoreSnapshot) {
        let reported = snapshot.mode.as_deref().and_then(Mode::from_server);

        let mismatched = match (self.mode, reported) {
            (Mode::Unset, Some(mode)) => {
                self.mode = mode;
                self.active = true;
                false
            }
            (current, Some(mode)) if current.is_playing() && current != mode => {
                warn!(local = %current, reported = %mode, "ignoring score for a different mode");
                true
            }
            _ => false,
        };

        if self.mode.is_playing() && !mismatched {
            self.runs = match self.mode {
                Mode::Bowling => snapshot.computer_score,
                _ => snapshot.player_score,
            };
            let strikes = u8::try_from(snapshot.strikes).unwrap_or(u8::MAX);
            self.wickets = STARTING_WICKETS.saturating_sub(strikes);

            // Bowling servers keep the target in player_score.
            if self.mode == Mode::Bowling && self.target.is_none() {
                self.target = TargetScore::new(i64::from(snapshot.player_score)).ok();
            }
        }

        self.server_score = Some(snapshot.clone());
    }
}
