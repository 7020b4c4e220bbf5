use lazy_regex::regex_captures;
use serde_json::Value;

/// Result of one submitted move, as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The batter lost a wicket.
    Out,
    /// Final wicket fell or the target was defended; the player lost.
    Lost,
    /// The player won the game.
    Won,
    /// The batter scored this many runs.
    Scored(u32),
    /// A tag or payload the client does not understand, kept as text.
    Unrecognized(String),
}

impl MoveOutcome {
    /// Decode a tag such as `"Out"` or `"Scored4"`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Out" => MoveOutcome::Out,
            "Lost" => MoveOutcome::Lost,
            "Won" => MoveOutcome::Won,
            _ => regex_captures!(r"^Scored(\d+)$", tag)
                .and_then(|(_, runs)| runs.parse::<u32>().ok())
                .map(MoveOutcome::Scored)
                .unwrap_or_else(|| MoveOutcome::Unrecognized(tag.to_string())),
        }
    }

    /// Decode the server's numeric enum value.
    pub fn from_code(code: i64) -> Self {
        match code {
            -2 => MoveOutcome::Lost,
            -1 => MoveOutcome::Out,
            1..=6 => MoveOutcome::Scored(code as u32),
            7 => MoveOutcome::Won,
            other => MoveOutcome::Unrecognized(other.to_string()),
        }
    }

    /// Decode a move response body.
    ///
    /// Accepts `{"name": tag}`, a bare tag string, or a bare integer code.
    /// Any other payload is echoed back as its JSON text.
    pub fn from_response(body: &Value) -> Self {
        match body {
            Value::Object(map) => match map.get("name") {
                Some(Value::String(tag)) => MoveOutcome::from_tag(tag),
                _ => MoveOutcome::Unrecognized(body.to_string()),
            },
            Value::String(tag) => MoveOutcome::from_tag(tag),
            Value::Number(n) => n
                .as_i64()
                .map(MoveOutcome::from_code)
                .unwrap_or_else(|| MoveOutcome::Unrecognized(n.to_string())),
            other => MoveOutcome::Unrecognized(other.to_string()),
        }
    }

    /// True when this outcome finishes the game.
    pub fn ends_game(&self) -> bool {
        matches!(self, MoveOutcome::Lost | MoveOutcome::Won)
    }

    /// Canonical tag spelling.
    pub fn tag(&self) -> String {
        match self {
            MoveOutcome::Out => "Out".to_string(),
            MoveOutcome::Lost => "Lost".to_string(),
            MoveOutcome::Won => "Won".to_string(),
            MoveOutcome::Scored(runs) => format!("Scored{runs}"),
            MoveOutcome::Unrecognized(raw) => raw.clone(),
        }
    }

    /// Player-facing description of the outcome.
    pub fn message(&self) -> String {
        match self {
            MoveOutcome::Out => "You're out!".to_string(),
            MoveOutcome::Lost => "Game Over. You lost.".to_string(),
            MoveOutcome::Won => "You won!".to_string(),
            MoveOutcome::Scored(runs) => format!("You scored {runs}."),
            MoveOutcome::Unrecognized(raw) => raw.clone(),
        }
    }
}
