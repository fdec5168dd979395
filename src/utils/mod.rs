//! Shared utilities.

pub mod shorthand;
