//! Run orchestration.
//!
//! Coordinates subject validation, mirroring, task discovery and dispatch.
//! Name selection happens before this step, see [`crate::select`].

use std::path::Path;

use anyhow::{Result, bail};
use tracing::{debug, info, instrument, warn};

use crate::core::stats::RunStatistics;
use crate::core::types::RegistryEntry;
use crate::dispatch::dispatch_all;
use crate::io::config::CrosstestConfig;
use crate::io::discovery::discover_tasks;
use crate::io::git::Vcs;
use crate::io::tester::Tester;
use crate::mirror::sync_mirrors;

/// Mirror `entries`, discover the subject's tasks and test each against every mirror.
///
/// Errors only on fatal conditions; per-task problems end up as warnings or in
/// the returned statistics.
#[instrument(skip_all, fields(subject = %subject.display()))]
pub fn run_crosstest<V: Vcs, T: Tester>(
    subject: &Path,
    config: &CrosstestConfig,
    entries: &[RegistryEntry],
    vcs: &V,
    tester: &T,
) -> Result<RunStatistics> {
    if !subject.is_dir() {
        bail!("path to own repo is not valid: {}", subject.display());
    }

    let mirrors = sync_mirrors(&config.storage_root, entries, vcs)?;
    debug!(repos = mirrors.repos.len(), "mirrors ready");

    let discovery = discover_tasks(subject, config)?;
    for message in &discovery.warnings {
        warn!("{message}");
    }
    info!(tasks = discovery.tasks.len(), "tasks discovered");

    Ok(dispatch_all(&discovery.tasks, &mirrors.repos, tester))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingVcs, Sandbox, ScriptedTester};

    #[test]
    fn invalid_subject_is_fatal_before_mirroring() {
        let sandbox = Sandbox::new().expect("sandbox");
        let config = CrosstestConfig {
            storage_root: sandbox.storage(),
            ..CrosstestConfig::default()
        };
        let vcs = RecordingVcs::default();
        let tester = ScriptedTester::default();
        let entries = vec![RegistryEntry::new(
            "Ivan Petrov",
            "321",
            "https://github.com/ipetrov/pythonprac",
        )];

        let err = run_crosstest(
            &sandbox.path().join("missing"),
            &config,
            &entries,
            &vcs,
            &tester,
        )
        .expect_err("fatal");
        assert!(err.to_string().contains("not valid"));
        assert!(vcs.clones().is_empty());
    }
}
