//! Discovery of `(assignment, task, program)` triples in the subject tree.
//!
//! Layout: `<subject>/<YYYYMMDD>/<N>/<program>`. Assignment and task
//! directories are visited in lexicographic order.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::core::program::{ProgramPick, pick_program};
use crate::core::types::TaskLocator;
use crate::io::config::CrosstestConfig;

const ASSIGNMENT_PATTERN: &str = r"^[0-9]{8}$";
const TASK_PATTERN: &str = r"^[0-9]+$";

/// A task with the program to test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTask {
    pub locator: TaskLocator,
    pub program: PathBuf,
}

/// Discovered tasks plus warnings for the tasks that were skipped or ambiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub tasks: Vec<DiscoveredTask>,
    pub warnings: Vec<String>,
}

/// Walk the subject tree and pick one program per task.
///
/// Only an unreadable subject root is an error; unreadable assignment or task
/// directories are skipped with a warning.
pub fn discover_tasks(subject_root: &Path, config: &CrosstestConfig) -> Result<Discovery> {
    let assignment_re = Regex::new(ASSIGNMENT_PATTERN).context("compile assignment pattern")?;
    let task_re = Regex::new(TASK_PATTERN).context("compile task pattern")?;
    let mut discovery = Discovery::default();

    for assignment in list_dirs(subject_root, &assignment_re)? {
        if config.ignored_assignments.contains(&assignment) {
            debug!(assignment = %assignment, "assignment ignored");
            continue;
        }
        let assignment_dir = subject_root.join(&assignment);
        let tasks = match list_dirs(&assignment_dir, &task_re) {
            Ok(tasks) => tasks,
            Err(err) => {
                discovery.warnings.push(unreadable(&assignment_dir, &err));
                continue;
            }
        };
        debug!(assignment = %assignment, tasks = ?tasks, "assignment scanned");

        for task in tasks {
            let locator = TaskLocator::new(&assignment, &task);
            let task_dir = assignment_dir.join(&task);
            let files = match list_files(&task_dir) {
                Ok(files) => files,
                Err(err) => {
                    discovery.warnings.push(unreadable(&task_dir, &err));
                    continue;
                }
            };
            debug!(task = %locator, files = ?files, "task scanned");

            let name = match pick_program(
                &files,
                &config.program_names,
                &config.source_extension,
            ) {
                ProgramPick::Missing => {
                    discovery
                        .warnings
                        .push(format!("no program found for {locator}, skipping"));
                    continue;
                }
                ProgramPick::Single(name) => name,
                ProgramPick::Ambiguous { chosen, candidates } => {
                    discovery.warnings.push(format!(
                        "too many programs to choose from in {locator}: {}, using {chosen}",
                        candidates.join(", ")
                    ));
                    chosen
                }
            };
            discovery.tasks.push(DiscoveredTask {
                program: task_dir.join(name),
                locator,
            });
        }
    }
    Ok(discovery)
}

fn unreadable(dir: &Path, err: &anyhow::Error) -> String {
    format!("cannot read {}: {err:#}, skipping", dir.display())
}

/// Sorted names of immediate subdirectories matching `pattern`.
fn list_dirs(dir: &Path, pattern: &Regex) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.context("read entry")?;
        if !entry.path().is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if pattern.is_match(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Sorted names of regular files in `dir`.
fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read {}", dir.display()))? {
        let entry = entry.context("read entry")?;
        if !entry.path().is_file() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
