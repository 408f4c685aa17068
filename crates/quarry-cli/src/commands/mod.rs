//! CLI command implementations.

pub mod config;
pub mod init;
pub mod lineage;
pub mod spawn;
pub mod uuid;
