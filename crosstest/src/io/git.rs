//! Git adapter for mirroring peer repositories.
//!
//! Mirroring only ever needs `git clone`, so the client is a single-method
//! trait; tests substitute a recorder that never touches the network.

use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result, anyhow};
use tracing::{debug, instrument};

/// Version-control client used by the mirror step.
pub trait Vcs {
    /// Clone `url` into `dest`. `dest` must not exist yet.
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()>;
}

/// [`Vcs`] backed by the `git` executable on `PATH`.
#[derive(Debug, Clone, Default)]
pub struct GitCli;

impl Vcs for GitCli {
    #[instrument(skip_all, fields(url = %url))]
    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        let dest = dest
            .to_str()
            .ok_or_else(|| anyhow!("mirror path {} is not valid UTF-8", dest.display()))?;
        debug!(dest, "cloning repository");
        self.run_checked(&["clone", "--quiet", url, dest])?;
        Ok(())
    }
}

impl GitCli {
    fn run_checked(&self, args: &[&str]) -> Result<Output> {
        let output = self.run(args)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("git {} failed: {}", args.join(" "), stderr.trim()));
        }
        Ok(output)
    }

    fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new("git")
            .args(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .with_context(|| format!("spawn git {}", args.join(" ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_of_missing_local_source_fails_with_git_message() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("no-such-repo");
        let dest = temp.path().join("mirror");
        let source = source.to_str().expect("utf-8 path");
        let err = GitCli
            .clone_repo(source, &dest)
            .expect_err("clone must fail");
        assert!(err.to_string().contains("clone"));
        assert!(!dest.exists());
    }
}
