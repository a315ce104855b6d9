//! Stable exit codes for the crosstest CLI.

/// Run completed; test outcomes are reported, not propagated.
pub const OK: i32 = 0;
/// Fatal condition: invalid subject path, storage root collision, bad config.
pub const FATAL: i32 = 1;
