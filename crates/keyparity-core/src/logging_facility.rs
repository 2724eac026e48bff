//! Structured logging facility for keyparity
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use keyparity_core::logging_facility::{init, Profile};
//!
//! init(Profile::Quiet);
//! ```
//!
//! Boundary events (`start`, `end`, `end_error`) are owned by the engine
//! layer. Code in this crate only emits `tracing::debug!` details.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
