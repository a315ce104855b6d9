//! Fuzzy owner-name resolution against the registry.
//!
//! A query is split on whitespace into tokens; every registry owner is scanned
//! for non-overlapping, case-insensitive occurrences of any token. The matched
//! fragments are joined with spaces and the entry with the longest joined match
//! wins. Ties keep the earlier entry and produce a warning.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::core::registry::Registry;
use crate::core::types::RegistryEntry;

/// Result of resolving one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Selected entry, if any owner matched at all.
    pub entry: Option<&'a RegistryEntry>,
    /// Space-joined matched fragments of the selected owner.
    pub matched: String,
    /// Tie and no-match warnings, in emission order.
    pub warnings: Vec<String>,
}

/// Resolve `query` to at most one registry entry.
pub fn resolve_owner<'a>(query: &str, registry: &'a Registry) -> Result<Resolution<'a>> {
    let Some(pattern) = query_pattern(query)? else {
        return Ok(Resolution {
            entry: None,
            matched: String::new(),
            warnings: vec![format!("no repo found for '{query}'")],
        });
    };

    let mut chosen: Option<&RegistryEntry> = None;
    let mut best = String::new();
    let mut warnings = Vec::new();

    for entry in registry.entries() {
        let matched = matched_fragments(&pattern, &entry.owner);
        if matched.is_empty() {
            continue;
        }
        let len = matched.chars().count();
        let best_len = best.chars().count();
        if len > best_len {
            chosen = Some(entry);
            best = matched;
        } else if len == best_len
            && let Some(current) = chosen
        {
            warnings.push(format!(
                "same owner name for '{query}' ({}), using {}",
                entry.owner, current.owner
            ));
        }
    }

    if chosen.is_none() {
        warnings.push(format!("no repo found for '{query}'"));
    }

    Ok(Resolution {
        entry: chosen,
        matched: best,
        warnings,
    })
}

/// Build the case-insensitive alternation over the query's tokens.
///
/// Returns `None` for a blank query. Tokens are matched literally.
fn query_pattern(query: &str) -> Result<Option<Regex>> {
    let tokens: Vec<String> = query.split_whitespace().map(regex::escape).collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    let pattern = RegexBuilder::new(&format!("(?:{})", tokens.join("|")))
        .case_insensitive(true)
        .build()
        .with_context(|| format!("build name pattern for '{query}'"))?;
    Ok(Some(pattern))
}

fn matched_fragments(pattern: &Regex, owner: &str) -> String {
    pattern
        .find_iter(owner)
        .map(|found| found.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
