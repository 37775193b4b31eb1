//! Domain logic for the property tax comparison lives here.

pub mod app_state;
pub mod entities;
pub mod evaluation;
pub mod session;

pub use app_state::AppState;
pub use entities::{AddressCandidate, Coordinates, MapArtifact, PropertyRecord, SubmissionRecord};
pub use evaluation::{
    compare, verdict, ComparisonResult, SavingsMultipliers, Verdict, VerdictStatus,
    ESTIMATE_DISCLAIMER,
};
pub use session::{GateDecision, SessionState};
