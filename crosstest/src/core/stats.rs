//! Run-wide accumulation of Tester outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::classifier::Outcome;
use crate::core::types::TaskLocator;

/// `(owner, task)` pair recorded for a failing dispatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailedTest {
    pub owner: String,
    /// `<assignment>/<task>`.
    pub task: String,
}

impl FailedTest {
    pub fn new(owner: &str, task: &TaskLocator) -> Self {
        Self {
            owner: owner.to_string(),
            task: task.to_string(),
        }
    }
}

impl fmt::Display for FailedTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.owner, self.task)
    }
}

/// Counters and failure lists for one run.
///
/// Tester faults are tracked apart from the four outcome categories: they are
/// never part of [`RunStatistics::total`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunStatistics {
    pub ok: usize,
    pub error: usize,
    pub mismatch: usize,
    pub unknown: usize,
    pub errors: Vec<FailedTest>,
    pub mismatches: Vec<FailedTest>,
    pub faults: Vec<FailedTest>,
}

impl RunStatistics {
    /// Count one classified outcome.
    pub fn record(&mut self, outcome: Outcome, owner: &str, task: &TaskLocator) {
        match outcome {
            Outcome::Ok => self.ok += 1,
            Outcome::Error => {
                self.error += 1;
                self.errors.push(FailedTest::new(owner, task));
            }
            Outcome::Mismatch => {
                self.mismatch += 1;
                self.mismatches.push(FailedTest::new(owner, task));
            }
            Outcome::Unknown => self.unknown += 1,
        }
    }

    /// Note a Tester fault. Category counters are left untouched.
    pub fn record_fault(&mut self, owner: &str, task: &TaskLocator) {
        self.faults.push(FailedTest::new(owner, task));
    }

    /// Sum of the four outcome categories.
    pub fn total(&self) -> usize {
        self.ok + self.error + self.mismatch + self.unknown
    }
}
