//! Terminal input parsing.

use std::str::FromStr;

use thiserror::Error;

pub const HELP: &str = "\
Commands:
  bat              start a game batting
  bowl <target>    start a game bowling against a target score
  1-6 | move <n>   play a move
  score            fetch the server's score
  new              discard this session and start over
  help             show this help
  quit             leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartBatting,
    StartBowling(i64),
    Move(i64),
    Score,
    New,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty input")]
    Empty,
    #[error("'{0}' needs a number")]
    MissingNumber(&'static str),
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(ParseCommandError::Empty)?;
        let arg = words.next();

        match head.to_ascii_lowercase().as_str() {
            "bat" | "batting" => Ok(Command::StartBatting),
            "bowl" | "bowling" => number(arg, "bowl").map(Command::StartBowling),
            "move" | "play" => number(arg, "move").map(Command::Move),
            "score" => Ok(Command::Score),
            "new" | "reload" => Ok(Command::New),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => other
                .parse::<i64>()
                .map(Command::Move)
                .map_err(|_| ParseCommandError::Unknown(head.to_string())),
        }
    }
}

fn number(arg: Option<&str>, command: &'static str) -> Result<i64, ParseCommandError> {
    let raw = arg.ok_or(ParseCommandError::MissingNumber(command))?;
    raw.parse::<i64>()
        .map_err(|_| ParseCommandError::NotANumber(raw.to_string()))
}
