//! Subcommand implementations

pub mod alloys;
pub mod compute;
pub mod session;
