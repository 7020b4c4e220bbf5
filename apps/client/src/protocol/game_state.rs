use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StartBowlingRequest {
    pub target_score: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveRequest {
    #[serde(rename = "move")]
    pub move_value: u8,
}

/// Acknowledgement returned by the start endpoints.
///
/// Some server builds answer with an empty body, so every field is optional.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MessageResponse {
    /// Read a start acknowledgement, tolerating empty or non-JSON bodies.
    pub fn from_body(body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned));
        Self { message }
    }
}

/// Authoritative score pulled from `GET /score`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreSnapshot {
    #[serde(default)]
    pub player_score: u32,
    #[serde(default)]
    pub computer_score: u32,
    #[serde(default)]
    pub strikes: u32,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Error payload; `detail` is a string for rule violations and a list for
/// request validation failures.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Detail text to surface verbatim, if any.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::String(_) | Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}
