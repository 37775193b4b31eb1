use uuid::Uuid;

pub const DEFAULT_MAX_SUBMISSIONS: u32 = 3;

/// Submission quota for one user session (one app window).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub id: Uuid,
    pub submission_count: u32,
    pub max_allowed: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allowed,
    QuotaExceeded,
}

impl SessionState {
    pub fn new(max_allowed: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            submission_count: 0,
            max_allowed,
        }
    }

    /// Counts an attempt against the quota. Refused attempts leave the count alone.
    pub fn try_consume(&mut self) -> GateDecision {
        if self.submission_count >= self.max_allowed {
            return GateDecision::QuotaExceeded;
        }
        self.submission_count += 1;
        GateDecision::Allowed
    }

    pub fn remaining(&self) -> u32 {
        self.max_allowed.saturating_sub(self.submission_count)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SUBMISSIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_stops_after_max_allowed() {
        let mut session = SessionState::new(3);

        for expected in 1..=3 {
            assert_eq!(session.try_consume(), GateDecision::Allowed);
            assert_eq!(session.submission_count, expected);
        }

        assert_eq!(session.try_consume(), GateDecision::QuotaExceeded);
        assert_eq!(session.try_consume(), GateDecision::QuotaExceeded);
        assert_eq!(session.submission_count, 3);
        assert!(session.is_exhausted());
    }

    #[test]
    fn remaining_counts_down() {
        let mut session = SessionState::default();
        assert_eq!(session.remaining(), 3);
        session.try_consume();
        assert_eq!(session.remaining(), 2);
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(SessionState::default().id, SessionState::default().id);
    }
}
