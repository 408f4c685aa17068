//! # Quarry Agents
//!
//! Predator-prey agents for actor-critic simulations.
//!
//! Every agent is a [`Creature`](creature::Creature) of one of five kinds:
//!
//! - **Agent** — food reserve, ceiling, generation, breeding probability, kin, memory
//! - **Predator** — adds an eat probability
//! - **Prey** — adds a flee probability and a per-individual eaten flag
//! - **OrientedPredator / OrientedPrey** — add a cardinal orientation, drawn at random by default
//!
//! Creatures are built in one call ([`builder`] or keyword arguments) and
//! reproduce through [`spawn`], which copies each kind's heritable fields.

pub mod builder;
pub mod creature;
pub mod fields;
pub mod prelude;
pub mod spawn;
