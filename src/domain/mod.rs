//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — View types and the pure formatting functions
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — Wire → view conversions
//! - `formatter.rs` — Sub-formatter bound to a [`crate::dashboard::Dashboard`]

pub mod series;
pub mod token;
pub mod transaction;
