//! Shared test utilities for the channel-builder workspace.
//!
//! Dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`git`] — git repository fixtures (init, commit, tag)
//! - [`plugins`] — installed-plugin directory fixtures with declaration files

pub mod git;
pub mod plugins;

pub use plugins::PluginFixture;
