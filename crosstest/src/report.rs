//! Final statistics output: console table and optional JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::stats::{FailedTest, RunStatistics};

/// Render the end-of-run summary printed to stdout.
pub fn render_summary(stats: &RunStatistics) -> String {
    let mut lines = vec![
        "======== Statistic ========".to_string(),
        format!("{:<10} {}", "ok:", stats.ok),
        format!("{:<10} {}", "error:", stats.error),
        format!("{:<10} {}", "mismatch:", stats.mismatch),
        format!("{:<10} {}", "unknown:", stats.unknown),
        format!("{:<10} {}", "total:", stats.total()),
    ];
    if !stats.faults.is_empty() {
        lines.push(format!("{:<10} {}", "faults:", stats.faults.len()));
    }
    push_section(&mut lines, "========= Errors =========", &stats.errors);
    push_section(&mut lines, "======== Mismatch ========", &stats.mismatches);
    push_section(&mut lines, "========= Faults =========", &stats.faults);
    lines.push(String::new());
    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, header: &str, items: &[FailedTest]) {
    if items.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(header.to_string());
    lines.extend(items.iter().map(ToString::to_string));
}

/// Machine-readable run summary written by `--report-json`.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub started_at: String,
    pub finished_at: String,
    pub ok: usize,
    pub error: usize,
    pub mismatch: usize,
    pub unknown: usize,
    pub total: usize,
    pub errors: &'a [FailedTest],
    pub mismatches: &'a [FailedTest],
    pub faults: &'a [FailedTest],
}

impl<'a> RunReport<'a> {
    pub fn new(
        stats: &'a RunStatistics,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        Self {
            started_at: started_at.to_rfc3339(),
            finished_at: finished_at.to_rfc3339(),
            ok: stats.ok,
            error: stats.error,
            mismatch: stats.mismatch,
            unknown: stats.unknown,
            total: stats.total(),
            errors: &stats.errors,
            mismatches: &stats.mismatches,
            faults: &stats.faults,
        }
    }
}

pub fn write_json_report(path: &Path, report: &RunReport<'_>) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(report).context("serialize report")?;
    fs::write(path, format!("{contents}\n"))
        .with_context(|| format!("write report {}", path.display()))?;
    Ok(())
}
