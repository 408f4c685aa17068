//! # Quarry Core
//!
//! Core types for Quarry predator-prey agents.
//!
//! This crate holds everything the agent records are built from:
//!
//! - **error** — the error taxonomy shared by every crate
//! - **types** — creature kinds, species, field names and heirship lists
//! - **validate** — write-once cells and range/kind checks for validated fields
//! - **memory** — the rolling state/reward/action log fed to the learner
//! - **orientation** — the four cardinal directions and their uniform draw
//! - **tools** — identifiers, timestamps, call counting, keyword checks, layered maps
//!
//! ## Quick Start
//!
//! ```rust
//! use quarry_core::prelude::*;
//!
//! let id = generate_uuid(Some("prey")).unwrap();
//! assert!(id.starts_with("B_"));
//!
//! assert!(Kind::OrientedPredator.heirship().contains(&Field::PEat));
//! ```

pub mod error;
pub mod memory;
pub mod orientation;
pub mod prelude;
pub mod tools;
pub mod types;
pub mod validate;
