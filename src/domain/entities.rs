use std::fmt;

use serde::{Deserialize, Serialize};

/// One autocomplete suggestion, exactly as the places service describes it.
pub type AddressCandidate = String;

/// Valuation data for a single property, as returned by the valuation service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// One-line address the valuation service resolved the query to.
    pub canonical_address: String,
    /// Automated valuation model estimate, whole dollars.
    pub market_value: i64,
    /// Total assessed value used by the taxing authority, whole dollars.
    pub assessed_value: i64,
    /// Date the AVM was last calculated, passed through verbatim.
    pub last_valuation_date: String,
}

/// Row appended to the marketing analytics spreadsheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub address: String,
    pub market_value: i64,
    pub assessed_value: i64,
    pub timestamp_utc: String,
}

impl SubmissionRecord {
    pub fn from_property(record: &PropertyRecord, timestamp_utc: String) -> Self {
        Self {
            address: record.canonical_address.clone(),
            market_value: record.market_value,
            assessed_value: record.assessed_value,
            timestamp_utc,
        }
    }

    /// Cells in spreadsheet column order: address, market, assessed, timestamp.
    pub fn to_row(&self) -> Vec<serde_json::Value> {
        vec![
            serde_json::Value::from(self.address.clone()),
            serde_json::Value::from(self.market_value),
            serde_json::Value::from(self.assessed_value),
            serde_json::Value::from(self.timestamp_utc.clone()),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Self-contained HTML document showing a single marker.
#[derive(Clone, Debug, PartialEq)]
pub struct MapArtifact {
    pub html: String,
    pub center: Coordinates,
    pub zoom: u8,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_row_keeps_column_order() {
        let property = PropertyRecord {
            canonical_address: "123 MAIN ST, SAN FRANCISCO, CA 94105".to_string(),
            market_value: 500_000,
            assessed_value: 600_000,
            last_valuation_date: "2023-05-01".to_string(),
        };
        let record = SubmissionRecord::from_property(&property, "2024-01-02 03:04:05".into());
        let row = record.to_row();

        assert_eq!(row.len(), 4);
        assert_eq!(row[0], "123 MAIN ST, SAN FRANCISCO, CA 94105");
        assert_eq!(row[1], 500_000);
        assert_eq!(row[2], 600_000);
        assert_eq!(row[3], "2024-01-02 03:04:05");
    }
}
