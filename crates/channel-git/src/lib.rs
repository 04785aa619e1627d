//! Git abstraction for Channel Builder
//!
//! Resolves a plugin checkout's latest release tag and its commit
//! timestamp through a narrow interface so the assembly logic never
//! touches git directly.

pub mod error;
pub mod tags;

pub use error::{Error, Result};
pub use tags::{GitTagSource, TagInfo, TagPolicy, TagSource};
