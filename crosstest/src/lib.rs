//! Cross-testing of student solutions against each other's test suites.
//!
//! Given a subject repository laid out as `<assignment>/<task>/<program>`, the
//! tool resolves a set of peers from a registry, mirrors their repositories
//! locally, and runs the subject's programs against every peer's
//! `<assignment>/<task>/tests` fixtures. The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (name matching, mirror keying,
//!   program selection, outcome classification, statistics). No I/O.
//! - **[`io`]**: Side-effecting operations (config file, git, child processes,
//!   directory scanning). Collaborators are traits so tests can script them.
//!
//! Orchestration modules ([`select`], [`mirror`], [`dispatch`], [`run`],
//! [`report`]) coordinate core logic with I/O to implement the CLI.

pub mod core;
pub mod dispatch;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod mirror;
pub mod report;
pub mod run;
pub mod select;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
