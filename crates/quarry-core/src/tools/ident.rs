//! Species-tagged identifiers.

use crate::error::Result;
use crate::types::Species;
use uuid::Uuid;

/// Length of every generated identifier: 2-character prefix + 32 hex digits.
pub const UUID_LENGTH: usize = 34;

/// Prefix for identifiers generated without a species.
pub const UNTAGGED_PREFIX: &str = "__";

/// Generate an identifier for `species`, given by name.
///
/// `"predator"` yields `J_…`, `"prey"` yields `B_…` and `None` yields
/// `__…`. Any other name is an unknown-species error.
pub fn generate_uuid(species: Option<&str>) -> Result<String> {
    let species = species.map(str::parse::<Species>).transpose()?;
    Ok(uuid_for(species))
}

/// Infallible form for callers that already hold a [`Species`].
pub fn uuid_for(species: Option<Species>) -> String {
    let prefix = species.map_or(UNTAGGED_PREFIX, |s| s.prefix());
    format!("{}{}", prefix, Uuid::new_v4().simple())
}
