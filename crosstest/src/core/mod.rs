//! Deterministic, pure logic shared by the crosstest pipeline.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return warnings as values so callers decide how to report them.

pub mod classifier;
pub mod mirror_path;
pub mod program;
pub mod registry;
pub mod resolver;
pub mod stats;
pub mod types;
