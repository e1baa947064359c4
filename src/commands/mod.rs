//! Command implementations for the bindx CLI

pub mod completions;
pub mod list;
pub mod lookup;
