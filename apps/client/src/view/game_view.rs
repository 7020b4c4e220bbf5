use tracing::{debug, info, warn};

use crate::domain::{GameSession, Mode, Move, MoveOutcome, TargetScore};
use crate::error::ClientError;
use crate::errors::ErrorCode;
use crate::protocol::ScoreSnapshot;
use crate::server::GameServer;
use crate::view::screen::Screen;

pub const BATTING_STARTED: &str = "Game started in batting mode.";
pub const BATTING_FAILED: &str = "Failed to start batting mode.";
pub const BOWLING_FAILED: &str = "Failed to start bowling mode.";
pub const MOVE_FAILED: &str = "Error making move.";
pub const SCORE_FAILED: &str = "Failed to fetch score.";
pub const NO_ACTIVE_GAME: &str = "No game in progress. Start batting or bowling first.";

/// The single presentation unit: local session plus the server it mirrors.
///
/// Every operation takes `&mut self`, so a view never has two requests in
/// flight. Each operation updates the session message, on success and on
/// failure, and returns the same result to the caller. Failures never touch
/// mode, runs, wickets, or target.
pub struct GameView<S> {
    server: S,
    session: GameSession,
    score_sync: bool,
}

impl<S: GameServer> GameView<S> {
    pub fn new(server: S) -> Self {
        Self {
            server,
            session: GameSession::new(),
            score_sync: false,
        }
    }

    /// Pull `/score` on load and after every successful mutating action.
    pub fn with_score_sync(mut self, enabled: bool) -> Self {
        self.score_sync = enabled;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn message(&self) -> &str {
        self.session.message()
    }

    pub fn server(&self) -> &S {
        &self.server
    }

    pub fn render(&self) -> Screen {
        Screen::from_session(&self.session)
    }

    /// Initial fetch when score sync is on; a no-op otherwise.
    pub async fn load(&mut self) -> Result<Option<ScoreSnapshot>, ClientError> {
        if !self.score_sync {
            return Ok(None);
        }
        self.fetch_score().await.map(Some)
    }

    pub async fn start_batting(&mut self) -> Result<Mode, ClientError> {
        if let Err(err) = self.session.mode().ensure_can_start() {
            return Err(self.reject(err));
        }

        match self.server.start_batting().await {
            Ok(ack) => {
                debug!(server_message = ?ack.message, "start batting acknowledged");
                self.session.begin(Mode::Batting, None);
                self.session.set_message(BATTING_STARTED);
                info!(mode = %Mode::Batting, "game started");
                self.sync_after_action().await;
                Ok(Mode::Batting)
            }
            Err(err) => Err(self.fail(err, BATTING_FAILED)),
        }
    }

    pub async fn start_bowling(&mut self, target_score: i64) -> Result<Mode, ClientError> {
        let target = match TargetScore::new(target_score) {
            Ok(target) => target,
            Err(err) => return Err(self.reject(err)),
        };
        if let Err(err) = self.session.mode().ensure_can_start() {
            return Err(self.reject(err));
        }

        match self.server.start_bowling(target).await {
            Ok(ack) => {
                debug!(server_message = ?ack.message, "start bowling acknowledged");
                self.session.begin(Mode::Bowling, Some(target));
                self.session.set_message(format!(
                    "Game started in bowling mode (target = {}).",
                    target.value()
                ));
                info!(mode = %Mode::Bowling, target = target.value(), "game started");
                self.sync_after_action().await;
                Ok(Mode::Bowling)
            }
            Err(err) => Err(self.fail(err, BOWLING_FAILED)),
        }
    }

    pub async fn make_move(&mut self, value: i64) -> Result<MoveOutcome, ClientError> {
        if !self.session.is_active() {
            return Err(self.reject(ClientError::validation(
                ErrorCode::GameNotActive,
                NO_ACTIVE_GAME,
            )));
        }
        let mv = match Move::new(value) {
            Ok(mv) => mv,
            Err(err) => return Err(self.reject(err)),
        };

        match self.server.submit_move(mv).await {
            Ok(outcome) => {
                self.session.apply_outcome(&outcome);
                self.session.set_message(outcome.message());
                if outcome.ends_game() {
                    info!(
                        outcome = %outcome.tag(),
                        runs = self.session.runs(),
                        wickets = self.session.wickets(),
                        "game over"
                    );
                } else if let MoveOutcome::Unrecognized(raw) = &outcome {
                    warn!(raw = %raw, "unrecognized move response");
                }
                self.sync_after_action().await;
                Ok(outcome)
            }
            Err(err) => Err(self.fail(err, MOVE_FAILED)),
        }
    }

    pub async fn fetch_score(&mut self) -> Result<ScoreSnapshot, ClientError> {
        match self.server.fetch_score().await {
            Ok(snapshot) => {
                self.session.apply_snapshot(&snapshot);
                Ok(snapshot)
            }
            Err(err) => Err(self.fail(err, SCORE_FAILED)),
        }
    }

    /// Follow-up score pull; its failure keeps the action's own message.
    async fn sync_after_action(&mut self) {
        if !self.score_sync {
            return;
        }
        match self.server.fetch_score().await {
            Ok(snapshot) => self.session.apply_snapshot(&snapshot),
            Err(err) => warn!(code = %err.code(), error = %err, "score sync failed"),
        }
    }

    fn reject(&mut self, err: ClientError) -> ClientError {
        debug!(code = %err.code(), "rejected before sending");
        self.session.set_message(err.display_message(""));
        err
    }

    fn fail(&mut self, err: ClientError, fallback: &str) -> ClientError {
        warn!(code = %err.code(), error = %err, "game server request failed");
        self.session.set_message(err.display_message(fallback));
        err
    }
}
