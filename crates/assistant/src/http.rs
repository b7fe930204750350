use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use repdesk_core::config::BackendConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::AssistantClient;

const ASK_PATH: &str = "/api/ai";

#[derive(Debug, Error)]
pub enum AssistantHttpError {
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("request to `{url}` failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("assistant endpoint returned status {status} for `{url}`")]
    Status { url: String, status: u16, body: String },
    #[error("could not decode assistant payload: {0}")]
    Decode(#[source] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

/// Pure body-to-answer decoding, split out of the transport path so it can
/// be exercised without a socket.
fn parse_answer(body: &str) -> Result<String, serde_json::Error> {
    serde_json::from_str::<AskResponse>(body).map(|response| response.answer)
}

pub struct HttpAssistantClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAssistantClient {
    pub fn new(config: &BackendConfig) -> Result<Self, AssistantHttpError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(AssistantHttpError::ClientBuild)?;

        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    async fn post_question(&self, question: &str) -> Result<String, AssistantHttpError> {
        let url = format!("{}{ASK_PATH}", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(|source| AssistantHttpError::Request { url: url.clone(), source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| AssistantHttpError::Request { url: url.clone(), source })?;

        if !status.is_success() {
            return Err(AssistantHttpError::Status { url, status: status.as_u16(), body });
        }

        parse_answer(&body).map_err(AssistantHttpError::Decode)
    }
}

#[async_trait]
impl AssistantClient for HttpAssistantClient {
    async fn ask(&self, question: &str) -> Result<String> {
        Ok(self.post_question(question).await?)
    }
}
