// Remote polarity scorer.
//
// Sends the sentence to an HTTP endpoint and reads back a polarity. Useful
// for swapping in a hosted model without touching the classifier.
//
// Wire format:
//   request:  POST <endpoint>  {"text": "..."}
//   response: 200              {"polarity": 0.42}

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::SentimentScorer;
use crate::output::truncate_chars;

/// Polarity scorer backed by an HTTP service.
pub struct RemoteScorer {
    client: Client,
    endpoint: String,
}

impl RemoteScorer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SentimentScorer for RemoteScorer {
    async fn polarity(&self, text: &str) -> Result<f64> {
        let request = PolarityRequest { text };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("Failed to call sentiment service at {}", self.endpoint))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Sentiment service returned {}: {}", status, body);
        }

        let result: PolarityResponse = response
            .json()
            .await
            .context("Failed to parse sentiment service response")?;

        debug!(
            polarity = result.polarity,
            text_preview = %truncate_chars(text, 50),
            "Scored text remotely"
        );

        Ok(result.polarity)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

// --- Sentiment service request/response types ---

#[derive(Serialize)]
struct PolarityRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct PolarityResponse {
    polarity: f64,
}
