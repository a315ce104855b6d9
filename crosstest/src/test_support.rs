//! Test doubles for the external collaborators and on-disk fixtures.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;

use crate::io::git::Vcs;
use crate::io::tester::Tester;

/// [`Vcs`] that records clone destinations and creates them as empty directories.
#[derive(Debug, Default)]
pub struct RecordingVcs {
    fail: bool,
    clones: RefCell<Vec<PathBuf>>,
}

impl RecordingVcs {
    /// Recorder whose clones always fail without creating anything.
    pub fn failing() -> Self {
        Self {
            fail: true,
            clones: RefCell::new(Vec::new()),
        }
    }

    /// Destinations of every clone attempt, in order.
    pub fn clones(&self) -> Vec<PathBuf> {
        self.clones.borrow().clone()
    }
}

impl Vcs for RecordingVcs {
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        self.clones.borrow_mut().push(dest.to_path_buf());
        if self.fail {
            return Err(anyhow!("scripted clone failure for {url}"));
        }
        fs::create_dir_all(dest).with_context(|| format!("create {}", dest.display()))?;
        Ok(())
    }
}

/// [`Tester`] that replays queued results. `Err(msg)` becomes a fault.
#[derive(Debug, Default)]
pub struct ScriptedTester {
    queue: RefCell<VecDeque<std::result::Result<i32, String>>>,
    calls: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl ScriptedTester {
    pub fn new(results: Vec<std::result::Result<i32, String>>) -> Self {
        Self {
            queue: RefCell::new(results.into()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// `(program, fixtures)` of every invocation, in order.
    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl Tester for ScriptedTester {
    fn run(&self, program: &Path, fixtures: &Path) -> Result<i32> {
        self.calls
            .borrow_mut()
            .push((program.to_path_buf(), fixtures.to_path_buf()));
        match self.queue.borrow_mut().pop_front() {
            Some(Ok(status)) => Ok(status),
            Some(Err(message)) => Err(anyhow!(message)),
            None => Err(anyhow!("scripted tester exhausted")),
        }
    }
}

/// Temporary directory holding a subject tree and a mirror storage root.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create sandbox")?;
        fs::create_dir_all(dir.path().join("subject")).context("create subject root")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Root of the subject repository.
    pub fn subject(&self) -> PathBuf {
        self.dir.path().join("subject")
    }

    /// Mirror storage root (not created until something is mirrored).
    pub fn storage(&self) -> PathBuf {
        self.dir.path().join("repos")
    }

    /// Write `<subject>/<assignment>/<task>/<name>`.
    pub fn add_program(&self, assignment: &str, task: &str, name: &str) -> Result<PathBuf> {
        let dir = self.subject().join(assignment).join(task);
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        let path = dir.join(name);
        fs::write(&path, "print(input())\n").with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Create `<storage>/<segment>/<assignment>/<task>/tests` with one fixture pair.
    pub fn add_fixtures(&self, segment: &str, assignment: &str, task: &str) -> Result<PathBuf> {
        let dir = self
            .storage()
            .join(segment)
            .join(assignment)
            .join(task)
            .join("tests");
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        fs::write(dir.join("1.in"), "1\n").context("write fixture input")?;
        fs::write(dir.join("1.out"), "1\n").context("write fixture output")?;
        Ok(dir)
    }
}
