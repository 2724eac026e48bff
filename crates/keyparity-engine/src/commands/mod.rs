//! Engine command handlers

pub mod check;
