//! Command implementations for channel-cli

pub mod build;
pub mod check;

pub use build::run_build;
pub use check::run_check;
