#![allow(dead_code)]

pub mod scripted_server;

use std::sync::Arc;

use client::prelude::{ClientError, GameView, ScoreSnapshot};
use client::StatusCode;

#[allow(unused_imports)]
pub use scripted_server::{Call, ScriptedServer};

pub type ScriptedView = GameView<Arc<ScriptedServer>>;

/// A view over a fresh scripted server, plus a handle to inspect it.
pub fn scripted_view() -> (Arc<ScriptedServer>, ScriptedView) {
    let server = ScriptedServer::new();
    let view = GameView::new(server.clone());
    (server, view)
}

pub fn network_down() -> ClientError {
    ClientError::transport("connection refused")
}

pub fn rejected(detail: &str) -> ClientError {
    ClientError::server(StatusCode::BAD_REQUEST, Some(detail.to_string()))
}

pub fn snapshot(player: u32, computer: u32, strikes: u32, mode: &str) -> ScoreSnapshot {
    ScoreSnapshot {
        player_score: player,
        computer_score: computer,
        strikes,
        mode: Some(mode.to_string()),
    }
}

/// Numeric session fields, for before/after comparisons.
pub fn numbers(view: &ScriptedView) -> (client::Mode, u32, u8, Option<u32>, bool) {
    let s = view.session();
    (
        s.mode(),
        s.runs(),
        s.wickets(),
        s.target().map(|t| t.value()),
        s.is_active(),
    )
}
