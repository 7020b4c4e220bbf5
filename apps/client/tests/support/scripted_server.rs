// In-memory GameServer with queued replies and a call log.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use client::prelude::{
    ClientError, GameServer, MessageResponse, Move, MoveOutcome, ScoreSnapshot, TargetScore,
};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    StartBatting,
    StartBowling(u32),
    Move(u8),
    FetchScore,
}

/// Replies are consumed in order. Start calls default to an empty
/// acknowledgement; move and score calls default to a transport failure so a
/// missing script line shows up as a failed action rather than a hang.
#[derive(Default)]
pub struct ScriptedServer {
    calls: Mutex<Vec<Call>>,
    starts: Mutex<VecDeque<Result<MessageResponse, ClientError>>>,
    moves: Mutex<VecDeque<Result<MoveOutcome, ClientError>>>,
    scores: Mutex<VecDeque<Result<ScoreSnapshot, ClientError>>>,
}

impl ScriptedServer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_start(&self, reply: Result<MessageResponse, ClientError>) {
        self.starts.lock().push_back(reply);
    }

    pub fn push_move(&self, reply: Result<MoveOutcome, ClientError>) {
        self.moves.lock().push_back(reply);
    }

    pub fn push_moves(&self, outcomes: impl IntoIterator<Item = MoveOutcome>) {
        self.moves.lock().extend(outcomes.into_iter().map(Ok));
    }

    pub fn push_score(&self, reply: Result<ScoreSnapshot, ClientError>) {
        self.scores.lock().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    fn next_start(&self) -> Result<MessageResponse, ClientError> {
        self.starts
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(MessageResponse::default()))
    }
}

#[async_trait]
impl GameServer for ScriptedServer {
    async fn start_batting(&self) -> Result<MessageResponse, ClientError> {
        self.record(Call::StartBatting);
        self.next_start()
    }

    async fn start_bowling(&self, target: TargetScore) -> Result<MessageResponse, ClientError> {
        self.record(Call::StartBowling(target.value()));
        self.next_start()
    }

    async fn submit_move(&self, mv: Move) -> Result<MoveOutcome, ClientError> {
        self.record(Call::Move(mv.value()));
        self.moves
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::transport("no scripted move reply")))
    }

    async fn fetch_score(&self) -> Result<ScoreSnapshot, ClientError> {
        self.record(Call::FetchScore);
        self.scores
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::transport("no scripted score reply")))
    }
}
