//! Path resolution and file metadata helpers for buildsync
//!
//! Change events arrive with possibly-relative paths; sync maps are
//! keyed by absolute, normalized paths. This crate provides the
//! resolution step plus the mod-time lookup the planner uses to
//! detect stale entries.

pub mod error;
pub mod meta;
pub mod path;

pub use error::{Error, Result};
pub use meta::mod_time;
pub use path::to_absolute;
