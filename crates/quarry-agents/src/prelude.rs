//! Quarry Agents Prelude — convenient imports for common usage.
//!
//! ```rust
//! use quarry_agents::prelude::*;
//! ```

pub use crate::builder::{CreatureBuilder, DEFAULT_P_BREED};
pub use crate::creature::{Creature, Role};

// Re-export from core
pub use quarry_core::prelude::*;
