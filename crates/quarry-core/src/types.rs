//! Shared types used across all Quarry crates.

use crate::error::{QuarryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The species an identifier is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Predator,
    Prey,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Predator => "predator",
            Species::Prey => "prey",
        }
    }

    /// Two-character identifier prefix for this species.
    pub fn prefix(&self) -> &'static str {
        match self {
            Species::Predator => "J_",
            Species::Prey => "B_",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "predator" => Ok(Species::Predator),
            "prey" => Ok(Species::Prey),
            other => Err(QuarryError::UnknownSpecies(other.to_string())),
        }
    }
}

/// Every attribute a creature can carry.
///
/// Names match the keyword names accepted by keyword construction and
/// the dynamic validated-write path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FoodReserve,
    MaxFoodReserve,
    Generation,
    PBreed,
    Kin,
    Memory,
    Uuid,
    PEat,
    PFlee,
    GotEaten,
    Orient,
}

impl Field {
    pub const ALL: [Field; 11] = [
        Field::FoodReserve,
        Field::MaxFoodReserve,
        Field::Generation,
        Field::PBreed,
        Field::Kin,
        Field::Memory,
        Field::Uuid,
        Field::PEat,
        Field::PFlee,
        Field::GotEaten,
        Field::Orient,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::FoodReserve => "food_reserve",
            Field::MaxFoodReserve => "max_food_reserve",
            Field::Generation => "generation",
            Field::PBreed => "p_breed",
            Field::Kin => "kin",
            Field::Memory => "memory",
            Field::Uuid => "uuid",
            Field::PEat => "p_eat",
            Field::PFlee => "p_flee",
            Field::GotEaten => "got_eaten",
            Field::Orient => "orient",
        }
    }

    /// Fields that lock after their first write.
    pub fn is_write_once(&self) -> bool {
        matches!(
            self,
            Field::MaxFoodReserve | Field::Generation | Field::Memory | Field::Uuid
        )
    }

    /// Look a field up by its keyword name.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const AGENT_HEIRSHIP: &[Field] = &[
    Field::MaxFoodReserve,
    Field::Generation,
    Field::PBreed,
    Field::Kin,
];

const PREDATOR_HEIRSHIP: &[Field] = &[
    Field::MaxFoodReserve,
    Field::Generation,
    Field::PBreed,
    Field::Kin,
    Field::PEat,
];

const PREY_HEIRSHIP: &[Field] = &[
    Field::MaxFoodReserve,
    Field::Generation,
    Field::PBreed,
    Field::Kin,
    Field::PFlee,
];

/// The concrete type of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Agent,
    Predator,
    Prey,
    OrientedPredator,
    OrientedPrey,
}

impl Kind {
    pub const ALL: [Kind; 5] = [
        Kind::Agent,
        Kind::Predator,
        Kind::Prey,
        Kind::OrientedPredator,
        Kind::OrientedPrey,
    ];

    /// Type name, also the default `kin` label.
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Agent => "Agent",
            Kind::Predator => "Predator",
            Kind::Prey => "Prey",
            Kind::OrientedPredator => "OrientedPredator",
            Kind::OrientedPrey => "OrientedPrey",
        }
    }

    pub fn species(&self) -> Option<Species> {
        match self {
            Kind::Agent => None,
            Kind::Predator | Kind::OrientedPredator => Some(Species::Predator),
            Kind::Prey | Kind::OrientedPrey => Some(Species::Prey),
        }
    }

    pub fn is_oriented(&self) -> bool {
        matches!(self, Kind::OrientedPredator | Kind::OrientedPrey)
    }

    /// Attributes passed from parent to offspring, in copy order.
    pub fn heirship(&self) -> &'static [Field] {
        match self.species() {
            None => AGENT_HEIRSHIP,
            Some(Species::Predator) => PREDATOR_HEIRSHIP,
            Some(Species::Prey) => PREY_HEIRSHIP,
        }
    }

    /// Whether a creature of this kind carries `field` at all.
    pub fn has_field(&self, field: Field) -> bool {
        match field {
            Field::PEat => self.species() == Some(Species::Predator),
            Field::PFlee | Field::GotEaten => self.species() == Some(Species::Prey),
            Field::Orient => self.is_oriented(),
            _ => true,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = QuarryError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.replace(['-', '_'], "").to_ascii_lowercase();
        Kind::ALL
            .iter()
            .copied()
            .find(|k| k.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| QuarryError::value("kind", "a known creature kind", s))
    }
}
