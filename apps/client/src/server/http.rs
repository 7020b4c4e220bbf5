//! reqwest-backed `GameServer`.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::domain::{Move, MoveOutcome, TargetScore};
use crate::error::ClientError;
use crate::protocol::{
    ErrorBody, MessageResponse, MoveRequest, ScoreSnapshot, StartBowlingRequest,
};
use crate::server::endpoints::EndpointContract;
use crate::server::trait_def::GameServer;

#[derive(Debug, Clone)]
pub struct HttpGameServer {
    http: Client,
    base_url: String,
    contract: EndpointContract,
}

impl HttpGameServer {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            contract: config.contract(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn non-2xx responses into `ClientError::Server`, keeping `detail`.
    async fn check_status(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        let detail = ErrorBody::from_body(&body).and_then(|b| b.detail_text());
        warn!(status = status.as_u16(), detail = ?detail, "game server rejected request");
        Err(ClientError::server(status, detail))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ClientError> {
        let resp = request.send().await?;
        Self::check_status(resp).await
    }
}

#[async_trait]
impl GameServer for HttpGameServer {
    async fn start_batting(&self) -> Result<MessageResponse, ClientError> {
        let path = self.contract.start_batting();
        debug!(path, "POST start batting");
        let resp = self.send(self.http.post(self.url(path))).await?;
        let body = resp.text().await?;
        Ok(MessageResponse::from_body(&body))
    }

    async fn start_bowling(&self, target: TargetScore) -> Result<MessageResponse, ClientError> {
        let path = self.contract.start_bowling();
        let payload = StartBowlingRequest {
            target_score: target.value(),
        };
        debug!(path, target = payload.target_score, "POST start bowling");
        let resp = self
            .send(self.http.post(self.url(path)).json(&payload))
            .await?;
        let body = resp.text().await?;
        Ok(MessageResponse::from_body(&body))
    }

    async fn submit_move(&self, mv: Move) -> Result<MoveOutcome, ClientError> {
        let path = self.contract.submit_move();
        let payload = MoveRequest {
            move_value: mv.value(),
        };
        debug!(path, move_value = payload.move_value, "POST move");
        let resp = self
            .send(self.http.post(self.url(path)).json(&payload))
            .await?;
        let body = resp.text().await?;

        // Bodies that are not JSON are echoed back as text.
        let outcome = match serde_json::from_str::<Value>(&body) {
            Ok(value) => MoveOutcome::from_response(&value),
            Err(_) => MoveOutcome::Unrecognized(body.trim().to_string()),
        };
        debug!(tag = %outcome.tag(), "move resolved");
        Ok(outcome)
    }

    async fn fetch_score(&self) -> Result<ScoreSnapshot, ClientError> {
        let path = self.contract.score();
        debug!(path, "GET score");
        let resp = self.send(self.http.get(self.url(path))).await?;
        let snapshot = resp.json::<ScoreSnapshot>().await?;
        debug!(?snapshot, "score fetched");
        Ok(snapshot)
    }
}
