//! Cross product of discovered tasks and mirrored repositories.
//!
//! Each `(task, repo)` pair with a fixture directory gets exactly one Tester
//! invocation; its status is classified into [`RunStatistics`]. Nothing here is
//! fatal: missing fixtures are skipped and Tester faults are recorded apart.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};

use crate::core::classifier::{Outcome, classify_status};
use crate::core::stats::RunStatistics;
use crate::core::types::{ResolvedRepo, TaskLocator};
use crate::io::discovery::DiscoveredTask;
use crate::io::tester::Tester;

/// Directory name of a fixture set inside `<mirror>/<assignment>/<task>/`.
pub const FIXTURES_DIR: &str = "tests";

/// `<mirror>/<assignment>/<task>/tests`.
pub fn fixtures_dir(mirror: &Path, task: &TaskLocator) -> PathBuf {
    mirror
        .join(&task.assignment)
        .join(&task.task)
        .join(FIXTURES_DIR)
}

/// Run every task against every repository's fixtures.
#[instrument(skip_all, fields(tasks = tasks.len(), repos = repos.len()))]
pub fn dispatch_all<T: Tester>(
    tasks: &[DiscoveredTask],
    repos: &[ResolvedRepo],
    tester: &T,
) -> RunStatistics {
    let mut stats = RunStatistics::default();
    for task in tasks {
        for repo in repos {
            dispatch_one(task, repo, tester, &mut stats);
        }
    }
    stats
}

fn dispatch_one<T: Tester>(
    task: &DiscoveredTask,
    repo: &ResolvedRepo,
    tester: &T,
    stats: &mut RunStatistics,
) {
    let owner = repo.entry.owner.as_str();
    let locator = &task.locator;
    let fixtures = fixtures_dir(&repo.local_path, locator);
    debug!(fixtures = %fixtures.display(), "looking for fixtures");

    if !fixtures.is_dir() {
        warn!("no tests for {locator} given by {owner}");
        return;
    }

    info!("testing {locator} on {owner} tests");
    let status = match tester.run(&task.program, &fixtures) {
        Ok(status) => status,
        Err(err) => {
            error!("tester failed to complete {locator} on {owner} tests: {err:#}");
            stats.record_fault(owner, locator);
            return;
        }
    };

    let outcome = classify_status(status);
    match outcome {
        Outcome::Ok => info!("tests completed successfully"),
        Outcome::Error => info!("tests were not completed due to errors"),
        Outcome::Mismatch => info!("tests completed but results do not match"),
        Outcome::Unknown => info!(status, "tests completed with unexpected status"),
    }
    stats.record(outcome, owner, locator);
}
