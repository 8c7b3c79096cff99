//! Shared utilities for unitcast
//!
//! This crate holds the pieces that every other unitcast crate needs: the
//! tagged numeric value used for quantities, floating point comparison, and
//! the trait used to turn errors into user-facing diagnostics.

pub mod error;
pub mod float;
pub mod number;
