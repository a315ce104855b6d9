//! Choice of the program file inside a task directory.

/// Result of matching a task directory listing against the allowed names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramPick {
    /// No allowed program present.
    Missing,
    /// Exactly one allowed program present.
    Single(String),
    /// Several allowed programs; `chosen` is the first in priority order.
    Ambiguous {
        chosen: String,
        candidates: Vec<String>,
    },
}

/// Intersect `file_names` (restricted to `extension`) with `allowed`.
///
/// `allowed` is a priority order, so the pick is stable regardless of how the
/// directory was listed.
pub fn pick_program(file_names: &[String], allowed: &[String], extension: &str) -> ProgramPick {
    let sources: Vec<&String> = file_names
        .iter()
        .filter(|name| name.ends_with(extension))
        .collect();
    let candidates: Vec<String> = allowed
        .iter()
        .filter(|name| sources.contains(name))
        .cloned()
        .collect();

    match candidates.as_slice() {
        [] => ProgramPick::Missing,
        [only] => ProgramPick::Single(only.clone()),
        [first, ..] => ProgramPick::Ambiguous {
            chosen: first.clone(),
            candidates,
        },
    }
}
