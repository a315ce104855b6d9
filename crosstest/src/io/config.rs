//! Crosstest configuration loaded from `crosstest.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::registry::Registry;
use crate::core::types::RegistryEntry;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "crosstest.toml";

/// Crosstest configuration (TOML).
///
/// Every field is optional; missing fields fall back to the values the tool
/// has always used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CrosstestConfig {
    /// Directory holding one mirror per peer repository.
    pub storage_root: PathBuf,

    /// Assignment directories never tested.
    pub ignored_assignments: Vec<String>,

    /// Recognized program file names, highest priority first.
    pub program_names: Vec<String>,

    /// Extension every program file carries.
    pub source_extension: String,

    pub tester: TesterConfig,

    /// Peer registry. Empty means the built-in table.
    pub repos: Vec<RegistryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TesterConfig {
    /// Command prefix; the program and fixture paths are appended.
    pub command: Vec<String>,

    /// Wall-clock limit for one Tester invocation, in seconds.
    pub timeout_secs: u64,
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            command: vec!["python3".to_string(), "tester.py".to_string()],
            timeout_secs: 10 * 60,
        }
    }
}

impl TesterConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for CrosstestConfig {
    fn default() -> Self {
        Self {
            storage_root: PathBuf::from("crosstest_repos"),
            ignored_assignments: vec!["20210909".to_string(), "20210916".to_string()],
            program_names: vec!["task.py".to_string(), "prog.py".to_string()],
            source_extension: ".py".to_string(),
            tester: TesterConfig::default(),
            repos: Vec::new(),
        }
    }
}

impl CrosstestConfig {
    pub fn validate(&self) -> Result<()> {
        if self.storage_root.as_os_str().is_empty() {
            return Err(anyhow!("storage_root must be non-empty"));
        }
        if self.source_extension.trim().is_empty() {
            return Err(anyhow!("source_extension must be non-empty"));
        }
        if self.program_names.is_empty() {
            return Err(anyhow!("program_names must be a non-empty array"));
        }
        for name in &self.program_names {
            if name.contains('/') || name.contains('\\') {
                return Err(anyhow!("program_names entry '{name}' must be a file name"));
            }
            if !name.ends_with(&self.source_extension) || name.len() == self.source_extension.len()
            {
                return Err(anyhow!(
                    "program_names entry '{name}' must end with '{}'",
                    self.source_extension
                ));
            }
        }
        if self.tester.command.is_empty() || self.tester.command[0].trim().is_empty() {
            return Err(anyhow!("tester.command must be a non-empty array"));
        }
        if self.tester.timeout_secs == 0 {
            return Err(anyhow!("tester.timeout_secs must be > 0"));
        }
        for (index, repo) in self.repos.iter().enumerate() {
            if repo.owner.trim().is_empty() {
                return Err(anyhow!("repos[{index}].owner must be non-empty"));
            }
            if repo.url.trim().is_empty() {
                return Err(anyhow!("repos[{index}].url must be non-empty"));
            }
        }
        Ok(())
    }

    /// Registry to resolve names against.
    pub fn registry(&self) -> Registry {
        if self.repos.is_empty() {
            Registry::embedded()
        } else {
            Registry::new(self.repos.clone())
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CrosstestConfig::default()`.
pub fn load_config(path: &Path) -> Result<CrosstestConfig> {
    if !path.exists() {
        let cfg = CrosstestConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("load {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<CrosstestConfig> {
    let cfg: CrosstestConfig = toml::from_str(contents).context("parse config toml")?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, CrosstestConfig::default());
        assert_eq!(cfg.registry(), Registry::embedded());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = parse_config(
            r#"
storage_root = "mirrors"

[tester]
command = ["sh", "run-tests.sh"]
"#,
        )
        .expect("parse");
        assert_eq!(cfg.storage_root, PathBuf::from("mirrors"));
        assert_eq!(cfg.tester.command, vec!["sh", "run-tests.sh"]);
        assert_eq!(cfg.tester.timeout_secs, TesterConfig::default().timeout_secs);
        assert_eq!(cfg.program_names, vec!["task.py", "prog.py"]);
    }

    #[test]
    fn repos_replace_embedded_registry() {
        let cfg = parse_config(
            r#"
[[repos]]
owner = "Ivan Petrov"
group = "321"
url = "https://github.com/ipetrov/pythonprac"
"#,
        )
        .expect("parse");
        let registry = cfg.registry();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.entries()[0].owner, "Ivan Petrov");
    }

    #[test]
    fn rejects_program_without_extension() {
        let err = parse_config(
            r#"
program_names = ["main.rb"]
"#,
        )
        .expect_err("invalid program name");
        assert!(err.to_string().contains("program_names"));
    }

    #[test]
    fn rejects_empty_tester_command() {
        let err = parse_config(
            r#"
[tester]
command = []
"#,
        )
        .expect_err("invalid tester");
        assert!(err.to_string().contains("tester.command"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = parse_config(
            r#"
[tester]
timeout_secs = 0
"#,
        )
        .expect_err("invalid timeout");
        assert!(err.to_string().contains("timeout_secs"));
    }
}
