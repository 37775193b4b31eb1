//! Submission pipeline: quota gate, valuation, comparison, then the
//! best-effort spreadsheet and map steps.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use time::{macros::format_description, OffsetDateTime};
use tracing::{info, info_span, warn, Instrument};

use crate::{
    domain::{
        compare, AddressCandidate, ComparisonResult, Coordinates, GateDecision, MapArtifact,
        PropertyRecord, SavingsMultipliers, SessionState, SubmissionRecord,
    },
    infra::{
        attom::{AttomClient, ValuationError},
        geocode::{GeocodeClient, GeocodeError},
        places::PlacesClient,
        sheets::{SheetsClient, SheetsError},
    },
    ui::map::render_map,
};

#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(&self, partial: &str) -> Option<Vec<AddressCandidate>>;
}

#[async_trait]
pub trait ValuationSource: Send + Sync {
    async fn fetch_valuation(&self, address: &str) -> Result<PropertyRecord, ValuationError>;
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Coordinates, GeocodeError>;
}

#[async_trait]
pub trait SubmissionLogger: Send + Sync {
    async fn append(&self, record: &SubmissionRecord) -> Result<(), SheetsError>;
}

#[async_trait]
impl AddressResolver for PlacesClient {
    async fn resolve(&self, partial: &str) -> Option<Vec<AddressCandidate>> {
        PlacesClient::resolve(self, partial).await
    }
}

#[async_trait]
impl ValuationSource for AttomClient {
    async fn fetch_valuation(&self, address: &str) -> Result<PropertyRecord, ValuationError> {
        AttomClient::fetch_valuation(self, address).await
    }
}

#[async_trait]
impl Geocoder for GeocodeClient {
    async fn geocode(&self, address: &str) -> Result<Coordinates, GeocodeError> {
        GeocodeClient::geocode(self, address).await
    }
}

#[async_trait]
impl SubmissionLogger for SheetsClient {
    async fn append(&self, record: &SubmissionRecord) -> Result<(), SheetsError> {
        SheetsClient::append(self, record).await
    }
}

pub const FORMAT_HINTS: [&str; 2] = [
    "Not all address formats will work. Try formatting your address like '123 Main St, San Francisco, CA'.",
    "Try 'Avenue' for 'Ave', '#1' for 'Unit 1', etc.",
];

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("submission limit of {max} reached for this session")]
    QuotaExceeded { max: u32 },
    #[error("no address selected")]
    MissingAddress,
    #[error("valuation lookup failed: {0}")]
    Valuation(#[from] ValuationError),
}

impl LookupError {
    /// Notices safe to show the user; raw status codes stay in the logs.
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            LookupError::QuotaExceeded { max } => vec![format!(
                "You've reached the limit of {max} submissions in this session. Please try again later."
            )],
            LookupError::MissingAddress => {
                vec!["Pick an address from the suggestions before submitting.".to_string()]
            }
            LookupError::Valuation(_) => FORMAT_HINTS.iter().map(|hint| hint.to_string()).collect(),
        }
    }
}

/// Everything the results view needs from one successful submission.
#[derive(Clone, Debug, PartialEq)]
pub struct LookupReport {
    pub record: PropertyRecord,
    pub comparison: ComparisonResult,
    /// `None` when geocoding failed; the rest of the report is still valid.
    pub map: Option<MapArtifact>,
    pub logged: bool,
}

pub struct LookupService {
    resolver: Arc<dyn AddressResolver>,
    valuation: Arc<dyn ValuationSource>,
    geocoder: Arc<dyn Geocoder>,
    logger: Arc<dyn SubmissionLogger>,
    multipliers: SavingsMultipliers,
    map_zoom: u8,
}

impl LookupService {
    pub fn new(
        resolver: Arc<dyn AddressResolver>,
        valuation: Arc<dyn ValuationSource>,
        geocoder: Arc<dyn Geocoder>,
        logger: Arc<dyn SubmissionLogger>,
        multipliers: SavingsMultipliers,
        map_zoom: u8,
    ) -> Self {
        Self {
            resolver,
            valuation,
            geocoder,
            logger,
            multipliers,
            map_zoom,
        }
    }

    pub async fn suggest(&self, partial: &str) -> Vec<AddressCandidate> {
        self.resolver.resolve(partial).await.unwrap_or_default()
    }

    /// Runs one submission. Quota is consumed before the valuation fetch,
    /// so failed lookups still count against the session.
    pub async fn submit(
        &self,
        session: &mut SessionState,
        address: &str,
    ) -> Result<LookupReport, LookupError> {
        let span = info_span!("submission", session = %session.id);

        if session.try_consume() == GateDecision::QuotaExceeded {
            span.in_scope(|| info!(max = session.max_allowed, "submission refused, quota exhausted"));
            return Err(LookupError::QuotaExceeded {
                max: session.max_allowed,
            });
        }

        let attempt = session.submission_count;
        let address = address.trim().to_string();
        self.run(address, attempt).instrument(span).await
    }

    async fn run(&self, address: String, attempt: u32) -> Result<LookupReport, LookupError> {
        if address.is_empty() {
            info!(attempt, "submission without an address");
            return Err(LookupError::MissingAddress);
        }

        let record = match self.valuation.fetch_valuation(&address).await {
            Ok(record) => record,
            Err(err) => {
                warn!(attempt, %address, status = ?err.status_code(), error = %err, "valuation fetch failed");
                return Err(err.into());
            }
        };

        let comparison = compare(&record, &self.multipliers);
        info!(
            attempt,
            address = %record.canonical_address,
            market = record.market_value,
            assessed = record.assessed_value,
            good_candidate = comparison.is_good_candidate,
            "valuation compared"
        );

        let logged = self.log_submission(&record).await;
        let map = self.locate(&record.canonical_address).await;

        Ok(LookupReport {
            record,
            comparison,
            map,
            logged,
        })
    }

    async fn log_submission(&self, record: &PropertyRecord) -> bool {
        let submission = SubmissionRecord::from_property(record, utc_timestamp());
        match self.logger.append(&submission).await {
            Ok(()) => true,
            Err(err) => {
                warn!(error = %err, "failed to record submission");
                false
            }
        }
    }

    async fn locate(&self, address: &str) -> Option<MapArtifact> {
        match self.geocoder.geocode(address).await {
            Ok(coords) => Some(render_map(coords, address, self.map_zoom)),
            Err(err) => {
                warn!(%address, error = %err, "geocoding failed, skipping map");
                None
            }
        }
    }
}

fn utc_timestamp() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_else(|_| OffsetDateTime::now_utc().unix_timestamp().to_string())
}
