use super::session::SessionState;
use crate::lookup::{LookupError, LookupReport};

/// Everything the UI needs for the current window.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub session: SessionState,
    /// Result of the most recent submission, cleared when it fails.
    pub report: Option<LookupReport>,
    pub in_flight: bool,
}

impl AppState {
    pub fn with_quota(max_allowed: u32) -> Self {
        Self {
            session: SessionState::new(max_allowed),
            ..Self::default()
        }
    }

    pub fn begin_submission(&mut self) {
        self.in_flight = true;
    }

    /// Failure messages are surfaced as toasts by the caller; the state only
    /// tracks what the results view renders.
    pub fn apply_outcome(
        &mut self,
        session: SessionState,
        outcome: Result<LookupReport, LookupError>,
    ) {
        self.session = session;
        self.in_flight = false;
        self.report = outcome.ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compare, PropertyRecord, SavingsMultipliers};
    use crate::infra::attom::ValuationError;

    fn report(address: &str) -> LookupReport {
        let record = PropertyRecord {
            canonical_address: address.to_string(),
            market_value: 500_000,
            assessed_value: 600_000,
            last_valuation_date: "2024-02-10".to_string(),
        };
        LookupReport {
            comparison: compare(&record, &SavingsMultipliers::default()),
            record,
            map: None,
            logged: true,
        }
    }

    #[test]
    fn successful_submission_stores_report() {
        let mut state = AppState::with_quota(3);
        state.begin_submission();
        assert!(state.in_flight);

        let mut session = state.session;
        session.try_consume();
        state.apply_outcome(session, Ok(report("1 FIRST ST")));

        assert!(!state.in_flight);
        assert_eq!(state.session.submission_count, 1);
        assert_eq!(
            state.report.as_ref().map(|r| r.record.canonical_address.as_str()),
            Some("1 FIRST ST")
        );
    }

    #[test]
    fn failed_submission_clears_previous_report() {
        let mut state = AppState::with_quota(3);
        let mut session = state.session;
        session.try_consume();
        state.apply_outcome(session, Ok(report("1 FIRST ST")));

        state.begin_submission();
        let mut session = state.session;
        session.try_consume();
        state.apply_outcome(
            session,
            Err(LookupError::Valuation(ValuationError::Status(500))),
        );

        assert!(!state.in_flight);
        assert_eq!(state.session.submission_count, 2);
        assert!(state.report.is_none());
    }

    #[test]
    fn refused_submission_also_clears_report() {
        let mut state = AppState::with_quota(1);
        let mut session = state.session;
        session.try_consume();
        state.apply_outcome(session, Ok(report("1 FIRST ST")));

        state.begin_submission();
        state.apply_outcome(state.session, Err(LookupError::QuotaExceeded { max: 1 }));

        assert!(state.report.is_none());
        assert_eq!(state.session.submission_count, 1);
    }
}
