//! qdiag
//!
//! Structured diagnostic errors for a distributed SQL query engine. This crate
//! re-exports [`qdiag_core`]; see its `error` module for the error value and
//! its `catalog` module for the documentation contract.

pub use qdiag_core::*;
