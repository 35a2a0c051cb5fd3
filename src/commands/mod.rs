//! Command handlers for the `relcheck` binary.

pub mod check;
pub mod completions;
pub mod flavours;
