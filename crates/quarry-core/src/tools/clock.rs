//! Wall-clock stamps.

use chrono::{DateTime, Local};
use std::fmt;

/// Textual format of [`timestamp`]: date, time and microseconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Either a structured point in time or its rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Stamp {
    At(DateTime<Local>),
    Text(String),
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stamp::At(t) => write!(f, "{}", t.format(TIMESTAMP_FORMAT)),
            Stamp::Text(s) => f.write_str(s),
        }
    }
}

/// The current local time.
pub fn now() -> DateTime<Local> {
    Local::now()
}

/// The current local time, rendered with [`TIMESTAMP_FORMAT`].
pub fn timestamp() -> String {
    now().format(TIMESTAMP_FORMAT).to_string()
}

/// Single-call form: structured when `return_obj` is true, text otherwise.
pub fn stamp(return_obj: bool) -> Stamp {
    if return_obj {
        Stamp::At(now())
    } else {
        Stamp::Text(timestamp())
    }
}
