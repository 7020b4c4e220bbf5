use std::fmt;

use crate::domain::{GameSession, Mode, Move, TargetScore};
use crate::protocol::ScoreSnapshot;

pub const TITLE: &str = "Cricket Game";

/// Everything the terminal shows for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub title: &'static str,
    pub message: String,
    pub panel: Panel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    /// Start controls; shown until a game begins.
    Start,
    /// Scoreboard plus the six move buttons.
    Playing(Scoreboard),
    /// Final scoreboard; only a fresh session can continue.
    Finished(Scoreboard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub mode: Mode,
    pub runs: u32,
    pub wickets: u8,
    pub target: Option<u32>,
    pub server: Option<ScoreSnapshot>,
}

impl Screen {
    pub fn from_session(session: &GameSession) -> Self {
        let scoreboard = || Scoreboard {
            mode: session.mode(),
            runs: session.runs(),
            wickets: session.wickets(),
            target: session.target().map(TargetScore::value),
            server: session.server_score().cloned(),
        };

        let panel = match session.mode() {
            Mode::Unset => Panel::Start,
            Mode::Batting | Mode::Bowling if session.is_active() => Panel::Playing(scoreboard()),
            Mode::Batting | Mode::Bowling => Panel::Start,
            Mode::GameOver => Panel::Finished(scoreboard()),
        };

        Self {
            title: TITLE,
            message: session.message().to_string(),
            panel,
        }
    }

    /// Move buttons currently on offer.
    pub fn move_buttons(&self) -> Vec<u8> {
        match self.panel {
            Panel::Playing(_) => Move::all().map(Move::value).collect(),
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;
        writeln!(f)?;
        writeln!(f, "{}", self.message)?;
        writeln!(f)?;

        match &self.panel {
            Panel::Start => {
                writeln!(f, "  bat            Start Batting")?;
                writeln!(f, "  bowl <target>  Start Bowling")?;
            }
            Panel::Playing(board) => {
                write_board(f, board)?;
                writeln!(f)?;
                let buttons = self.move_buttons();
                for row in buttons.chunks(3) {
                    let line: Vec<String> = row.iter().map(|n| format!("[{n}]")).collect();
                    writeln!(f, "  {}", line.join(" "))?;
                }
            }
            Panel::Finished(board) => {
                write_board(f, board)?;
                writeln!(f)?;
                writeln!(f, "  new            Start a fresh session")?;
            }
        }
        Ok(())
    }
}

fn write_board(f: &mut fmt::Formatter<'_>, board: &Scoreboard) -> fmt::Result {
    writeln!(f, "Mode: {}", board.mode)?;
    writeln!(f, "Runs: {}", board.runs)?;
    writeln!(f, "Wickets Left: {}", board.wickets)?;
    if let Some(target) = board.target.filter(|_| board.mode == Mode::Bowling) {
        writeln!(f, "Target: {target}")?;
    }
    if let Some(server) = &board.server {
        writeln!(
            f,
            "Server: player {} / computer {} / strikes {}",
            server.player_score, server.computer_score, server.strikes
        )?;
    }
    Ok(())
}
