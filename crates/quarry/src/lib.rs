//! # Quarry
//!
//! Validated predator-prey agent records for actor-critic simulations.
//!
//! Quarry holds the data side of a predator-prey learning loop: agents with
//! an energy budget, a lineage counter, breeding and species probabilities,
//! an optional facing direction and a rolling memory of transitions. Every
//! field is written through a validating setter, and agents reproduce by
//! copying a fixed, per-kind list of heritable fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use quarry::prelude::*;
//!
//! let wolf = Creature::builder(Kind::Predator, 5.0)
//!     .max_food_reserve(20.0)
//!     .generation(3)
//!     .p_eat(0.4)
//!     .build()?;
//!
//! let cub = wolf.procreate(2.0)?;
//! assert_eq!(cub.generation(), Some(4));
//! assert_eq!(cub.p_eat(), Some(0.4));
//! assert_eq!(cub.food_reserve(), 2.0);
//!
//! println!("{}", cub);
//! # Ok::<(), QuarryError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`quarry_core`] - Errors, kinds and heirship lists, validated fields, memory, orientation, utilities
//! - [`quarry_agents`] - The creature record, its builder, field access by name, procreation
//!
//! ## Kinds
//!
//! | Kind | Extra fields | Heritable |
//! |------|--------------|-----------|
//! | Agent | — | max_food_reserve, generation, p_breed, kin |
//! | Predator | p_eat | Agent's + p_eat |
//! | Prey | p_flee, got_eaten | Agent's + p_flee |
//! | OrientedPredator | p_eat, orient | as Predator |
//! | OrientedPrey | p_flee, got_eaten, orient | as Prey |

pub use quarry_agents;
pub use quarry_core;

pub mod prelude {
    //! Everything needed to build and breed creatures.
    pub use quarry_agents::prelude::*;
}
