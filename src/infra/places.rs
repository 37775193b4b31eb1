//! Address autocomplete backed by the Google Places API.

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::AddressCandidate;

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct PlacesClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    predictions: Vec<PredictionDto>,
}

#[derive(Debug, Deserialize)]
struct PredictionDto {
    description: String,
}

impl PlacesClient {
    pub fn new(http: Client, endpoint: &str, api_key: impl Into<String>) -> Result<Self, PlacesError> {
        Ok(Self {
            http,
            endpoint: Url::parse(endpoint)?,
            api_key: api_key.into(),
        })
    }

    /// Suggestions for a partial address, in the ranking order the service returned.
    ///
    /// Empty input yields `Some(vec![])` without touching the network; any
    /// failure yields `None`. Callers show no suggestions in both cases.
    pub async fn resolve(&self, partial: &str) -> Option<Vec<AddressCandidate>> {
        let query = partial.trim();
        if query.is_empty() {
            return Some(Vec::new());
        }

        match self.fetch_predictions(query).await {
            Ok(Some(candidates)) => Some(candidates),
            Ok(None) => None,
            Err(err) => {
                tracing::debug!(error = %err, "autocomplete request failed");
                None
            }
        }
    }

    async fn fetch_predictions(
        &self,
        query: &str,
    ) -> Result<Option<Vec<AddressCandidate>>, PlacesError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("input", query)
            .append_pair("key", &self.api_key);

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            tracing::debug!(status = response.status().as_u16(), "autocomplete returned no results");
            return Ok(None);
        }

        let payload: AutocompleteResponse = response.json().await?;
        Ok(Some(
            payload
                .predictions
                .into_iter()
                .map(|prediction| prediction.description)
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::infra::http::{build_client, test_server};

    fn client(base: &str) -> PlacesClient {
        let http = build_client(Duration::from_secs(5)).unwrap();
        PlacesClient::new(http, &format!("{base}/autocomplete/json"), "maps-key").unwrap()
    }

    #[tokio::test]
    async fn empty_query_skips_network() {
        // Nothing listens on port 9; a request would fail and yield None.
        let client = client("http://127.0.0.1:9");
        assert_eq!(client.resolve("").await, Some(Vec::new()));
        assert_eq!(client.resolve("   ").await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn predictions_keep_server_order() {
        let body = r#"{"predictions":[{"description":"123 Main St, San Francisco, CA, USA"},{"description":"123 Main St, Sacramento, CA, USA"}],"status":"OK"}"#;
        let (base, captured) = test_server::serve_once(200, body).await;

        let results = client(&base).resolve("123 Main").await.unwrap();
        assert_eq!(
            results,
            vec![
                "123 Main St, San Francisco, CA, USA".to_string(),
                "123 Main St, Sacramento, CA, USA".to_string(),
            ]
        );

        let requests = captured.await.unwrap();
        let line = requests[0].request_line();
        assert!(line.starts_with("GET /autocomplete/json?"));
        assert!(line.contains("input=123+Main"));
        assert!(line.contains("key=maps-key"));
    }

    #[tokio::test]
    async fn server_error_means_no_results() {
        let (base, _captured) = test_server::serve_once(503, "{}").await;
        assert_eq!(client(&base).resolve("123 Main").await, None);
    }
}
