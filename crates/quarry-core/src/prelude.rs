//! Quarry Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use quarry_core::prelude::*;
//! ```

pub use crate::types::{Field, Kind, Species};
pub use crate::memory::{Action, Memory, State};
pub use crate::orientation::Orientation;
pub use crate::validate::{JsonKind, WriteOnce};

pub use crate::tools::chain_map::ChainMap;
pub use crate::tools::clock::{now, stamp, timestamp, Stamp};
pub use crate::tools::counter::Counted;
pub use crate::tools::ident::{generate_uuid, UUID_LENGTH};
pub use crate::tools::kwargs::{require_kwarg, Kwargs};

pub use crate::error::{ErrorKind, QuarryError, Result};
