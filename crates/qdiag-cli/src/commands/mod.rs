//! CLI commands

pub mod describe;
pub mod list;
pub mod namespaces;
pub mod render;
pub mod search;
pub mod verify;

use anyhow::{Context, Result};
use qdiag_core::ErrorCode;

pub(crate) fn parse_code(text: &str) -> Result<ErrorCode> {
    text.parse::<ErrorCode>()
        .with_context(|| format!("'{}' is not a numeric error code", text))
}
