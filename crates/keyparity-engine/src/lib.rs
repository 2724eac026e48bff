//! keyparity Engine - Orchestration layer
//!
//! Runs a complete check: validates configuration, groups documents, loads
//! each group through a [`DocumentLoader`](keyparity_core::DocumentLoader),
//! compares it and assembles the [`RunReport`](keyparity_core::RunReport).
//! Also provides the filesystem and in-memory loaders.

pub mod commands;
pub mod errors;
pub mod loader;

pub use commands::check::{check_group, run_check, CheckOptions, FailurePolicy};
pub use loader::{JsonFileLoader, MemoryLoader};
