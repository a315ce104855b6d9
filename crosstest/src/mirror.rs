//! Clone-if-absent mirroring of the selected repositories.
//!
//! Existing mirrors are left untouched; there is no fetch or refresh. A failed
//! clone is only logged: the missing fixtures surface later, per task.

use std::path::Path;

use anyhow::{Result, bail};
use tracing::{debug, info, instrument, warn};

use crate::core::mirror_path::{Assignment, MirrorLayout};
use crate::core::types::{RegistryEntry, ResolvedRepo};
use crate::io::git::Vcs;

/// Result of the mirror step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorReport {
    /// Repositories to dispatch against, in selection order.
    pub repos: Vec<ResolvedRepo>,
    /// True when no clone had to be attempted.
    pub up_to_date: bool,
    /// Collisions, unusable URLs and clone failures.
    pub warnings: Vec<String>,
}

/// Ensure every entry has a local mirror under `storage_root`.
///
/// Fails only when `storage_root` exists and is not a directory.
#[instrument(skip_all, fields(storage_root = %storage_root.display(), selected = entries.len()))]
pub fn sync_mirrors<V: Vcs>(
    storage_root: &Path,
    entries: &[RegistryEntry],
    vcs: &V,
) -> Result<MirrorReport> {
    if storage_root.exists() && !storage_root.is_dir() {
        bail!(
            "unable to open {}: file with this name already exists",
            storage_root.display()
        );
    }
    info!("updating repository storage");

    let mut layout = MirrorLayout::new(storage_root);
    let mut report = MirrorReport {
        up_to_date: true,
        ..MirrorReport::default()
    };

    for entry in entries {
        let local_path = match layout.assign(&entry.url) {
            Assignment::Path(path) => path,
            Assignment::Collision { segment, existing } => {
                let message = format!(
                    "mirror directory '{segment}' for {} is already used by {existing}, skipping",
                    entry.owner
                );
                warn!("{message}");
                report.warnings.push(message);
                continue;
            }
            Assignment::Invalid(reason) => {
                let message = format!("cannot mirror repo of {}: {reason}", entry.owner);
                warn!("{message}");
                report.warnings.push(message);
                continue;
            }
        };

        if local_path.exists() {
            debug!(owner = %entry.owner, path = %local_path.display(), "mirror present");
        } else {
            report.up_to_date = false;
            info!(owner = %entry.owner, url = %entry.url, "cloning repository");
            if let Err(err) = vcs.clone_repo(&entry.url, &local_path) {
                let message = format!("clone of {} failed: {err:#}", entry.url);
                warn!("{message}");
                report.warnings.push(message);
            }
        }

        report.repos.push(ResolvedRepo {
            mirrored: local_path.is_dir(),
            entry: entry.clone(),
            local_path,
        });
    }

    if report.up_to_date {
        info!("repos are up to date");
    } else {
        info!("repos updated");
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingVcs;
    use std::fs;
    use tempfile::tempdir;

    fn entry(owner: &str, url: &str) -> RegistryEntry {
        RegistryEntry::new(owner, "321", url)
    }

    #[test]
    fn clones_missing_and_reports_updated() {
        let temp = tempdir().expect("tempdir");
        let root = temp.path().join("repos");
        let vcs = RecordingVcs::default();
        let entries = vec![entry("Ivan Petrov", "https://github.com/ipetrov/pythonprac")];

        let report = sync_mirrors(&root, &entries, &vcs).expect("sync");
        assert!(!report.up_to_date);
        assert_eq!(vcs.clones(), vec![root.join("ipetrov")]);
        assert_eq!(report.repos[0].local_path, root.join("ipetrov"));
        assert!(report.repos[0].mirrored);
    }

    #[test]
    fn existing_mirror_is_left_alone() {
        let temp = tempdir().expect("tempdir");
        let root = temp.path().join("repos");
        fs::create_dir_all(root.join("ipetrov")).expect("mirror");
        let vcs = RecordingVcs::default();
        let entries = vec![entry("Ivan Petrov", "https://github.com/ipetrov/pythonprac")];

        let report = sync_mirrors(&root, &entries, &vcs).expect("sync");
        assert!(report.up_to_date);
        assert!(vcs.clones().is_empty());
    }

    #[test]
    fn failed_clone_is_not_fatal() {
        let temp = tempdir().expect("tempdir");
        let root = temp.path().join("repos");
        let vcs = RecordingVcs::failing();
        let entries = vec![entry("Ivan Petrov", "https://github.com/ipetrov/pythonprac")];

        let report = sync_mirrors(&root, &entries, &vcs).expect("sync");
        assert_eq!(report.repos.len(), 1);
        assert!(!report.repos[0].mirrored);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn storage_root_file_is_fatal() {
        let temp = tempdir().expect("tempdir");
        let root = temp.path().join("repos");
        fs::write(&root, "not a directory").expect("file");
        let vcs = RecordingVcs::default();
        let entries = vec![entry("Ivan Petrov", "https://github.com/ipetrov/pythonprac")];

        let err = sync_mirrors(&root, &entries, &vcs).expect_err("fatal");
        assert!(err.to_string().contains("already exists"));
        assert!(vcs.clones().is_empty());
    }

    #[test]
    fn colliding_segment_is_skipped() {
        let temp = tempdir().expect("tempdir");
        let root = temp.path().join("repos");
        let vcs = RecordingVcs::default();
        let entries = vec![
            entry("Ivan Petrov", "https://github.com/student/pythonprac"),
            entry("Ivan Sidorov", "https://git.cs.msu.ru/student/pythonprac"),
        ];

        let report = sync_mirrors(&root, &entries, &vcs).expect("sync");
        assert_eq!(report.repos.len(), 1);
        assert_eq!(report.repos[0].entry.owner, "Ivan Petrov");
        assert_eq!(vcs.clones().len(), 1);
        assert!(report.warnings[0].contains("Ivan Sidorov"));
    }
}
