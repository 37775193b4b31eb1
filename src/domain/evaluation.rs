use serde::{Deserialize, Serialize};

use super::entities::PropertyRecord;

pub const DEFAULT_SAVINGS_LOW: f64 = 0.008;
pub const DEFAULT_SAVINGS_HIGH: f64 = 0.022;

/// Share of the market/assessed gap a homeowner typically saves per year.
///
/// The bounds track local tax rates, so they come from configuration rather
/// than being fixed here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavingsMultipliers {
    pub low: f64,
    pub high: f64,
}

impl Default for SavingsMultipliers {
    fn default() -> Self {
        Self {
            low: DEFAULT_SAVINGS_LOW,
            high: DEFAULT_SAVINGS_HIGH,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonResult {
    pub difference: i64,
    pub low_estimate: f64,
    pub high_estimate: f64,
    pub is_good_candidate: bool,
}

impl ComparisonResult {
    /// Savings range shown to the user, only for properties worth challenging.
    pub fn savings_range(&self) -> Option<(f64, f64)> {
        self.is_good_candidate
            .then_some((self.low_estimate, self.high_estimate))
    }
}

/// Shown under every result, whatever the verdict.
pub const ESTIMATE_DISCLAIMER: &str = "This estimate is based on recent public data from your county. Specific values regarding your property will change this result.";

/// Copy and figures for the savings block of a good candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct SavingsSummary {
    pub heading: &'static str,
    pub blurb: &'static str,
    pub low: f64,
    pub high: f64,
}

impl ComparisonResult {
    pub fn savings_summary(&self) -> Option<SavingsSummary> {
        self.savings_range().map(|(low, high)| SavingsSummary {
            heading: "Potential tax savings",
            blurb: "Based on your current market value, we think you have a good chance of lowering your assessed value. Lower assessed value, lower property taxes.",
            low,
            high,
        })
    }
}

pub fn compare(record: &PropertyRecord, multipliers: &SavingsMultipliers) -> ComparisonResult {
    // Saturated valuations can differ by more than i64::MAX.
    let gap = record.market_value.abs_diff(record.assessed_value);
    let difference = i64::try_from(gap).unwrap_or(i64::MAX);
    let gap = gap as f64;

    ComparisonResult {
        difference,
        low_estimate: gap * multipliers.low,
        high_estimate: gap * multipliers.high,
        is_good_candidate: record.market_value < record.assessed_value,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerdictStatus {
    GoodCandidate,
    NotCandidate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub headline: &'static str,
    pub rationale: &'static str,
}

pub fn verdict(result: &ComparisonResult) -> Verdict {
    if result.is_good_candidate {
        Verdict {
            status: VerdictStatus::GoodCandidate,
            headline: "You're a good candidate to challenge your property taxes!",
            rationale: "Your property taxes are based on the assessed value of your home, so you want this number to be as low as possible. Based on your current market value, we think you have a good chance of lowering your assessed value.",
        }
    } else {
        Verdict {
            status: VerdictStatus::NotCandidate,
            headline: "You're not a good candidate to challenge your property taxes at this time.",
            rationale: "Your assessed value would need to be higher than your market value in order to challenge property taxes.",
        }
    }
}
