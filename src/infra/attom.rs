//! Property valuation lookups against the ATTOM AVM detail endpoint.

use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::PropertyRecord;

#[derive(Debug, Error)]
pub enum ValuationError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("valuation service responded with status {0}")]
    Status(u16),
    #[error("valuation response missing {0}")]
    MissingField(&'static str),
}

impl ValuationError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ValuationError::Status(code) => Some(*code),
            ValuationError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

/// Street line and the rest of the address, as the service expects them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressParts {
    pub street: String,
    pub remainder: String,
}

pub fn split_address(address: &str) -> AddressParts {
    let mut parts = address.split(',');
    let street = parts.next().unwrap_or_default().trim().to_string();
    let remainder = parts
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    AddressParts { street, remainder }
}

#[derive(Clone)]
pub struct AttomClient {
    http: Client,
    endpoint: Url,
    api_key: String,
}

impl AttomClient {
    pub fn new(http: Client, endpoint: &str, api_key: impl Into<String>) -> Result<Self, ValuationError> {
        Ok(Self {
            http,
            endpoint: Url::parse(endpoint)?,
            api_key: api_key.into(),
        })
    }

    pub async fn fetch_valuation(&self, address: &str) -> Result<PropertyRecord, ValuationError> {
        let parts = split_address(address);
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("address1", &parts.street)
            .append_pair("address2", &parts.remainder);

        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .header("apikey", &self.api_key)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(ValuationError::Status(response.status().as_u16()));
        }

        let payload: AvmDetailResponse = response.json().await?;
        payload.into_record()
    }
}

#[derive(Debug, Deserialize)]
struct AvmDetailResponse {
    #[serde(default)]
    property: Vec<PropertyDto>,
}

#[derive(Debug, Deserialize)]
struct PropertyDto {
    #[serde(default)]
    address: Option<AddressDto>,
    #[serde(default)]
    avm: Option<AvmDto>,
    #[serde(default)]
    assessment: Option<AssessmentDto>,
}

#[derive(Debug, Deserialize)]
struct AddressDto {
    #[serde(rename = "oneLine", default)]
    one_line: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AvmDto {
    #[serde(default)]
    amount: Option<AmountDto>,
    #[serde(rename = "eventDate", default)]
    event_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AmountDto {
    #[serde(default)]
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct AssessmentDto {
    #[serde(default)]
    assessed: Option<AssessedDto>,
}

#[derive(Debug, Deserialize)]
struct AssessedDto {
    #[serde(default)]
    assdttlvalue: Option<f64>,
}

impl AvmDetailResponse {
    fn into_record(self) -> Result<PropertyRecord, ValuationError> {
        let property = self
            .property
            .into_iter()
            .next()
            .ok_or(ValuationError::MissingField("property[0]"))?;

        let canonical_address = property
            .address
            .and_then(|a| a.one_line)
            .ok_or(ValuationError::MissingField("address.oneLine"))?;
        let avm = property.avm.ok_or(ValuationError::MissingField("avm"))?;
        let market_value = avm
            .amount
            .and_then(|a| a.value)
            .ok_or(ValuationError::MissingField("avm.amount.value"))?;
        let last_valuation_date = avm
            .event_date
            .ok_or(ValuationError::MissingField("avm.eventDate"))?;
        let assessed_value = property
            .assessment
            .and_then(|a| a.assessed)
            .and_then(|a| a.assdttlvalue)
            .ok_or(ValuationError::MissingField("assessment.assessed.assdttlvalue"))?;

        Ok(PropertyRecord {
            canonical_address,
            // Whole dollars; cents are dropped, not rounded.
            market_value: market_value.trunc() as i64,
            assessed_value: assessed_value.trunc() as i64,
            last_valuation_date,
        })
    }
}
