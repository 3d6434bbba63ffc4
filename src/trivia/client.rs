//! Open Trivia DB client.
//!
//! Two read-only endpoints:
//! - `GET {base}/api_category.php` → `{trivia_categories: [...]}`
//! - `GET {base}/api.php?amount=N&type=multiple[&category=C][&difficulty=D]`
//!   → `{response_code, results: [...]}`

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::source::{TriviaError, TriviaSource};
use super::types::{Category, CategoryResponse, QuestionQuery, QuestionResponse, RawQuestion};

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub struct OpenTdbClient {
    base_url: String,
    client: reqwest::Client,
}

impl OpenTdbClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: Option<String>, timeout: Duration) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout ({}), using defaults", e);
                reqwest::Client::new()
            });

        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<T, TriviaError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} params={:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| TriviaError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Trivia API error: {} - {}", status, body);
            return Err(TriviaError::Api {
                status,
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TriviaError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Malformed trivia response from {}: {}", url, e);
            TriviaError::Parse(e.to_string())
        })
    }
}

#[async_trait]
impl TriviaSource for OpenTdbClient {
    fn name(&self) -> &str {
        "opentdb"
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let parsed: CategoryResponse = self.get_json("api_category.php", &[]).await?;
        info!("Fetched {} categories", parsed.trivia_categories.len());
        Ok(parsed.trivia_categories)
    }

    async fn fetch_questions(&self, query: &QuestionQuery) -> Result<Vec<RawQuestion>, TriviaError> {
        info!(
            "Fetching questions: amount={}, category={:?}, difficulty={:?}",
            query.amount, query.category, query.difficulty
        );
        let parsed: QuestionResponse = self.get_json("api.php", &query.params()).await?;

        if parsed.response_code != 0 {
            warn!("Trivia API returned response_code {}", parsed.response_code);
            return Err(TriviaError::NoQuestionsAvailable {
                response_code: parsed.response_code,
            });
        }

        info!("Fetched {} questions", parsed.results.len());
        Ok(parsed.results)
    }
}
