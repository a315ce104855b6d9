use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One known peer repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryEntry {
    /// Human-readable owner name, matched by the resolver.
    pub owner: String,
    /// Study group label. Informational only.
    #[serde(default)]
    pub group: String,
    /// Clone URL, e.g. `https://github.com/<namespace>/<repo>`.
    pub url: String,
}

impl RegistryEntry {
    pub fn new(owner: &str, group: &str, url: &str) -> Self {
        Self {
            owner: owner.to_string(),
            group: group.to_string(),
            url: url.to_string(),
        }
    }
}

/// A registry entry with its local mirror location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRepo {
    pub entry: RegistryEntry,
    /// `<storage_root>/<namespace segment of url>`.
    pub local_path: PathBuf,
    /// True if the mirror directory exists after the clone-if-absent step.
    pub mirrored: bool,
}

/// One graded task in the subject tree: `<assignment>/<task>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TaskLocator {
    /// Eight-digit date directory, e.g. `20210923`.
    pub assignment: String,
    /// Numeric task directory, e.g. `1`.
    pub task: String,
}

impl TaskLocator {
    pub fn new(assignment: &str, task: &str) -> Self {
        Self {
            assignment: assignment.to_string(),
            task: task.to_string(),
        }
    }
}

impl fmt::Display for TaskLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.assignment, self.task)
    }
}
