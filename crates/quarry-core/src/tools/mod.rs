//! Small collaborators used around the agent records: identifier
//! generation, wall-clock stamps, call counting, keyword checks and a
//! layered map.

pub mod chain_map;
pub mod clock;
pub mod counter;
pub mod ident;
pub mod kwargs;
