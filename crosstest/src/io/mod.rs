//! I/O adapters for crosstest runs.

pub mod config;
pub mod discovery;
pub mod git;
pub mod process;
pub mod tester;
