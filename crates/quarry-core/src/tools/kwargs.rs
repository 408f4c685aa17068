//! Keyword-argument checks.
//!
//! Keyword arguments are a `serde_json::Map` of loosely typed values.

use crate::error::{QuarryError, Result};
use crate::validate::{expect_kind, JsonKind};
use serde_json::{Map, Value};

/// Keyword arguments by name.
pub type Kwargs = Map<String, Value>;

/// Look up a required keyword argument of the given kind.
pub fn required<'a>(kwargs: &'a Kwargs, name: &str, expected: JsonKind) -> Result<&'a Value> {
    let value = kwargs
        .get(name)
        .ok_or_else(|| QuarryError::missing_argument(name))?;
    expect_kind(name, value, expected)?;
    Ok(value)
}

/// Wrap `f` so that every call first checks that `name` is present and of
/// kind `expected`.
pub fn require_kwarg<F, R>(
    name: impl Into<String>,
    expected: JsonKind,
    f: F,
) -> impl Fn(&Kwargs) -> Result<R>
where
    F: Fn(&Kwargs) -> Result<R>,
{
    let name = name.into();
    move |kwargs: &Kwargs| {
        required(kwargs, &name, expected)?;
        f(kwargs)
    }
}
