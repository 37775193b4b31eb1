//! Address to coordinates via the Google Geocoding API.

use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::Coordinates;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("geocoding status {0}")]
    Status(String),
    #[error("geocoding returned no results")]
    NoResults,
}

#[derive(Clone)]
pub struct GeocodeClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResultDto>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResultDto {
    geometry: GeometryDto,
}

#[derive(Debug, Deserialize)]
struct GeometryDto {
    location: LocationDto,
}

#[derive(Debug, Deserialize)]
struct LocationDto {
    lat: f64,
    lng: f64,
}

impl GeocodeClient {
    pub fn new(http: Client, endpoint: &str, api_key: impl Into<String>) -> Result<Self, GeocodeError> {
        Ok(Self {
            http,
            endpoint: Url::parse(endpoint)?,
            api_key: api_key.into(),
        })
    }

    pub async fn geocode(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("address", address)
            .append_pair("key", &self.api_key);

        // The API reports failures in the body, so the HTTP status is only a transport check.
        let payload: GeocodeResponse = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if payload.status != "OK" {
            return Err(GeocodeError::Status(payload.status));
        }

        payload
            .results
            .into_iter()
            .next()
            .map(|result| Coordinates {
                latitude: result.geometry.location.lat,
                longitude: result.geometry.location.lng,
            })
            .ok_or(GeocodeError::NoResults)
    }
}
