use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of a shared-axis comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPair {
    /// Timestamp taken verbatim from the primary series.
    pub ts: DateTime<Utc>,
    /// Primary sample value.
    pub primary: f64,
    /// Nearest secondary sample within tolerance. `None` is a gap in the
    /// secondary feed, not an error; render it as such.
    pub secondary: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_gap_serializes_as_null_not_zero() {
        let row = AlignedPair {
            ts: DateTime::UNIX_EPOCH,
            primary: 1.5,
            secondary: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["secondary"], serde_json::Value::Null);
        assert_eq!(json["primary"], 1.5);
    }
}
