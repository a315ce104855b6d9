//! Selection of peer repositories for a run.
//!
//! Either the whole registry (`--saveall`) or one entry per `--who` name.
//! The caller's own entry (`--me`) is dropped from either set.

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::registry::Registry;
use crate::core::resolver::resolve_owner;
use crate::core::types::RegistryEntry;

/// Which registry entries the user asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectRequest {
    /// Name queries, already split on `,`.
    pub who: Vec<String>,
    /// Take every registry entry instead of resolving `who`.
    pub saveall: bool,
    /// Caller's own name, excluded from the selection.
    pub me: Option<String>,
}

/// Selected entries, in registry order for `saveall` and query order otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub entries: Vec<RegistryEntry>,
    /// Everything that was logged as a warning while selecting.
    pub warnings: Vec<String>,
}

/// Split a comma-separated `--who` value into trimmed, non-empty queries.
pub fn parse_who(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}

pub fn select_repos(registry: &Registry, request: &SelectRequest) -> Result<Selection> {
    let mut selection = Selection::default();

    let own = match request.me.as_deref() {
        Some(me) => {
            let resolution = resolve_owner(me, registry)?;
            emit(&mut selection, resolution.warnings);
            resolution.entry.cloned()
        }
        None => None,
    };

    let candidates: Vec<RegistryEntry> = if request.saveall {
        registry.entries().to_vec()
    } else {
        let mut resolved = Vec::new();
        for query in &request.who {
            let resolution = resolve_owner(query, registry)?;
            emit(&mut selection, resolution.warnings);
            if let Some(entry) = resolution.entry {
                debug!(query = %query, owner = %entry.owner, matched = %resolution.matched, "name resolved");
                resolved.push(entry.clone());
            }
        }
        resolved
    };

    for entry in candidates {
        if own.as_ref() == Some(&entry) {
            debug!(owner = %entry.owner, "skipping own repository");
            continue;
        }
        if selection.entries.contains(&entry) {
            debug!(owner = %entry.owner, "repository already selected");
            continue;
        }
        selection.entries.push(entry);
    }
    Ok(selection)
}

fn emit(selection: &mut Selection, warnings: Vec<String>) {
    for message in warnings {
        warn!("{message}");
        selection.warnings.push(message);
    }
}
