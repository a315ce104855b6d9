//! Deterministic classification of Tester status codes.

use serde::{Deserialize, Serialize};

/// Tester status for a clean pass.
pub const STATUS_OK: i32 = 0;
/// Tester status when the program failed to run through the fixtures.
pub const STATUS_ERROR: i32 = 1;
/// Tester status when outputs did not match the expected ones.
pub const STATUS_MISMATCH: i32 = 3;

/// Outcome category of one Tester invocation that returned a status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Ok,
    Error,
    Mismatch,
    Unknown,
}

pub fn classify_status(status: i32) -> Outcome {
    match status {
        STATUS_OK => Outcome::Ok,
        STATUS_ERROR => Outcome::Error,
        STATUS_MISMATCH => Outcome::Mismatch,
        _ => Outcome::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_statuses_map_to_categories() {
        let outcomes: Vec<Outcome> = [0, 1, 3, 7].into_iter().map(classify_status).collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Ok,
                Outcome::Error,
                Outcome::Mismatch,
                Outcome::Unknown
            ]
        );
    }

    #[test]
    fn other_statuses_are_unknown() {
        for status in [2, 4, -1, 127, 255] {
            assert_eq!(classify_status(status), Outcome::Unknown);
        }
    }
}
