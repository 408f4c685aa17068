//! Construction of creatures.
//!
//! A creature is built in one call, either from a typed builder or from
//! loosely typed keyword arguments. Both paths write every field through
//! the validating setters, so an invalid argument fails the whole
//! construction.
//!
//! ```rust
//! use quarry_agents::prelude::*;
//!
//! let wolf = Creature::builder(Kind::Predator, 5.0)
//!     .max_food_reserve(20.0)
//!     .generation(3)
//!     .p_eat(0.4)
//!     .build()?;
//! assert_eq!(wolf.kin(), "Predator");
//! # Ok::<(), QuarryError>(())
//! ```

use crate::creature::Creature;
use crate::fields::{memory_from_value, orientation_from_value};
use quarry_core::error::Result;
use quarry_core::memory::Memory;
use quarry_core::orientation::Orientation;
use quarry_core::tools::ident::uuid_for;
use quarry_core::tools::kwargs::{required, Kwargs};
use quarry_core::types::{Field, Kind};
use quarry_core::validate::{expect_str, JsonKind};
use rand::Rng;
use serde_json::{Map, Value};
use tracing::debug;

/// Default breeding probability.
pub const DEFAULT_P_BREED: f64 = 1.0;

/// Builder for [`Creature`]. Only `food_reserve` is mandatory.
#[derive(Debug, Clone)]
pub struct CreatureBuilder {
    kind: Kind,
    food_reserve: f64,
    max_food_reserve: Option<f64>,
    generation: Option<u64>,
    p_breed: f64,
    kin: Option<String>,
    memory: Option<Memory>,
    memory_limit: Option<usize>,
    uuid: Option<String>,
    p_eat: Option<f64>,
    p_flee: Option<f64>,
    got_eaten: Option<bool>,
    orient: Option<Orientation>,
    extras: Map<String, Value>,
}

impl CreatureBuilder {
    pub fn new(kind: Kind, food_reserve: f64) -> Self {
        Self {
            kind,
            food_reserve,
            max_food_reserve: None,
            generation: None,
            p_breed: DEFAULT_P_BREED,
            kin: None,
            memory: None,
            memory_limit: None,
            uuid: None,
            p_eat: None,
            p_flee: None,
            got_eaten: None,
            orient: None,
            extras: Map::new(),
        }
    }

    pub fn max_food_reserve(mut self, max_food_reserve: f64) -> Self {
        self.max_food_reserve = Some(max_food_reserve);
        self
    }

    pub fn generation(mut self, generation: u64) -> Self {
        self.generation = Some(generation);
        self
    }

    pub fn p_breed(mut self, p_breed: f64) -> Self {
        self.p_breed = p_breed;
        self
    }

    /// Override the kin label. Only plain agents take an override; the
    /// species kinds always start out labelled with their type name.
    pub fn kin(mut self, kin: impl Into<String>) -> Self {
        self.kin = Some(kin.into());
        self
    }

    pub fn memory(mut self, memory: Memory) -> Self {
        self.memory = Some(memory);
        self
    }

    /// Keep at most `limit` transitions in memory.
    pub fn memory_limit(mut self, limit: usize) -> Self {
        self.memory_limit = Some(limit);
        self
    }

    /// Use a given identifier instead of generating one.
    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn p_eat(mut self, p_eat: f64) -> Self {
        self.p_eat = Some(p_eat);
        self
    }

    pub fn p_flee(mut self, p_flee: f64) -> Self {
        self.p_flee = Some(p_flee);
        self
    }

    pub fn got_eaten(mut self, got_eaten: bool) -> Self {
        self.got_eaten = Some(got_eaten);
        self
    }

    /// Fix the orientation. Without this, oriented kinds draw one at random.
    pub fn orient(mut self, orient: Orientation) -> Self {
        self.orient = Some(orient);
        self
    }

    /// Attach an unvalidated extension field.
    pub fn extra(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extras.insert(name.into(), value);
        self
    }

    /// Build, drawing any random orientation from the thread-local RNG.
    pub fn build(self) -> Result<Creature> {
        self.build_with(&mut rand::thread_rng())
    }

    /// Build, drawing any random orientation from `rng`.
    pub fn build_with<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Creature> {
        let kind = self.kind;
        let mut c = Creature::blank(kind);

        match self.uuid {
            Some(uuid) => c.set_uuid(uuid)?,
            None => c.set_uuid(uuid_for(kind.species()))?,
        }
        c.set_food_reserve(self.food_reserve)?;
        if let Some(max) = self.max_food_reserve {
            c.set_max_food_reserve(max)?;
        }
        if let Some(generation) = self.generation {
            c.set_generation(generation)?;
        }
        c.set_p_breed(self.p_breed)?;
        match self.kin {
            Some(kin) if kind == Kind::Agent => c.set_kin(kin),
            Some(kin) => debug!(kind = kind.name(), kin = %kin, "kin override ignored"),
            None => {}
        }
        c.set_memory(self.memory.unwrap_or_default())?;
        c.memory_limit = self.memory_limit;
        if let Some(limit) = self.memory_limit {
            if let Some(memory) = c.memory_mut() {
                memory.truncate_front(limit);
            }
        }

        if let Some(p) = self.p_eat {
            c.set_p_eat(p)?;
        }
        if let Some(p) = self.p_flee {
            c.set_p_flee(p)?;
        }
        if let Some(eaten) = self.got_eaten {
            c.set_got_eaten(eaten)?;
        }
        match self.orient {
            Some(o) => c.set_orient(o)?,
            None if kind.is_oriented() => {
                c.reorient(rng)?;
            }
            None => {}
        }

        c.extras = self.extras;
        Ok(c)
    }
}

impl Creature {
    /// Start building a creature of `kind`.
    pub fn builder(kind: Kind, food_reserve: f64) -> CreatureBuilder {
        CreatureBuilder::new(kind, food_reserve)
    }

    /// Construct from keyword arguments.
    ///
    /// `food_reserve` is required. Recognised names are validated like any
    /// other write; `null` counts as not given. Names this kind does not
    /// know are kept verbatim as extension fields.
    pub fn from_kwargs(kind: Kind, kwargs: &Kwargs) -> Result<Creature> {
        Self::from_kwargs_with(kind, kwargs, &mut rand::thread_rng())
    }

    pub fn from_kwargs_with<R: Rng + ?Sized>(
        kind: Kind,
        kwargs: &Kwargs,
        rng: &mut R,
    ) -> Result<Creature> {
        let food = required(kwargs, Field::FoodReserve.name(), JsonKind::Number)?;
        let mut builder = CreatureBuilder::new(kind, food.as_f64().unwrap_or_default());
        let mut deferred = Vec::new();

        for (name, value) in kwargs {
            let field = match Field::from_name(name) {
                Some(field) if kind.has_field(field) => field,
                _ => {
                    builder = builder.extra(name.clone(), value.clone());
                    continue;
                }
            };
            if value.is_null() {
                continue;
            }
            // Fields locked at construction are routed through the builder.
            match field {
                Field::FoodReserve => {}
                Field::Uuid => builder = builder.uuid(expect_str(name, value)?),
                Field::Memory => builder = builder.memory(memory_from_value(value)?),
                Field::Orient => builder = builder.orient(orientation_from_value(value)?),
                Field::Kin if kind != Kind::Agent => {
                    let kin = expect_str(name, value)?;
                    debug!(kind = kind.name(), kin, "kin override ignored");
                }
                _ => deferred.push(field),
            }
        }

        let mut creature = builder.build_with(rng)?;
        // Apply in declaration order so the ceiling sees the final reserve.
        deferred.sort_by_key(|f| Field::ALL.iter().position(|g| g == f));
        for field in deferred {
            creature.set_field(field.name(), &kwargs[field.name()])?;
        }
        Ok(creature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::error::ErrorKind;
    use serde_json::json;

    fn kw(v: Value) -> Kwargs {
        match v {
            Value::Object(map) => map,
            _ => unreachable!("test helper takes objects"),
        }
    }

    #[test]
    fn defaults() {
        let c = Creature::builder(Kind::Agent, 3.0).build().unwrap();
        assert_eq!(c.food_reserve(), 3.0);
        assert_eq!(c.max_food_reserve(), None);
        assert_eq!(c.generation(), None);
        assert_eq!(c.p_breed(), 1.0);
        assert_eq!(c.kin(), "Agent");
        assert!(c.memory().unwrap().is_empty());
        assert!(c.uuid().starts_with("__"));
        assert_eq!(c.orient(), None);
    }

    #[test]
    fn kin_override_only_for_plain_agents() {
        let a = Creature::builder(Kind::Agent, 1.0).kin("Scout").build().unwrap();
        assert_eq!(a.kin(), "Scout");
        let p = Creature::builder(Kind::Prey, 1.0).kin("Scout").build().unwrap();
        assert_eq!(p.kin(), "Prey");
    }

    #[test]
    fn invalid_argument_fails_construction() {
        let err = Creature::builder(Kind::Predator, 1.0).p_eat(1.5).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueKind);
        let err = Creature::builder(Kind::Prey, 1.0).p_eat(0.5).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeKind);
        let err = Creature::builder(Kind::Agent, 5.0).max_food_reserve(4.0).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueKind);
        let err = Creature::builder(Kind::Agent, 1.0).uuid("short").build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueKind);
    }

    #[test]
    fn kwargs_require_food_reserve() {
        let err = Creature::from_kwargs(Kind::Agent, &kw(json!({"generation": 1}))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingArgumentKind);
        let err = Creature::from_kwargs(Kind::Agent, &kw(json!({"food_reserve": "lots"})))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeKind);
    }

    #[test]
    fn kwargs_validate_known_fields() {
        let c = Creature::from_kwargs(
            Kind::OrientedPredator,
            &kw(json!({
                "food_reserve": 4,
                "max_food_reserve": 9.5,
                "generation": 2,
                "p_breed": 0.5,
                "p_eat": 0.75,
                "orient": [0, -1],
            })),
        )
        .unwrap();
        assert_eq!(c.food_reserve(), 4.0);
        assert_eq!(c.max_food_reserve(), Some(9.5));
        assert_eq!(c.generation(), Some(2));
        assert_eq!(c.p_breed(), 0.5);
        assert_eq!(c.p_eat(), Some(0.75));
        assert_eq!(c.orient(), Some(Orientation::DOWN));

        let err = Creature::from_kwargs(
            Kind::Predator,
            &kw(json!({"food_reserve": 1, "generation": "two"})),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeKind);

        let err = Creature::from_kwargs(
            Kind::Prey,
            &kw(json!({"food_reserve": 1, "got_eaten": 1})),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeKind);
    }

    #[test]
    fn kwargs_keep_unknown_fields() {
        let c = Creature::from_kwargs(
            Kind::Prey,
            &kw(json!({"food_reserve": 1, "colour": "grey", "p_eat": 0.2, "kin": "Rabbit"})),
        )
        .unwrap();
        assert_eq!(c.extra("colour"), Some(&json!("grey")));
        // p_eat is not a prey field, so it is kept rather than validated.
        assert_eq!(c.extra("p_eat"), Some(&json!(0.2)));
        assert_eq!(c.p_eat(), None);
        assert_eq!(c.kin(), "Prey");
    }

    #[test]
    fn kwargs_ignored_kin_is_still_type_checked() {
        let err = Creature::from_kwargs(Kind::Prey, &kw(json!({"food_reserve": 1, "kin": 5})))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeKind);

        let err = Creature::from_kwargs(Kind::Agent, &kw(json!({"food_reserve": 1, "kin": 5})))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeKind);
    }

    #[test]
    fn kwargs_memory_and_null() {
        let c = Creature::from_kwargs(
            Kind::Agent,
            &kw(json!({
                "food_reserve": 0,
                "generation": null,
                "memory": {"States": [[1.0]], "Rewards": [0.5], "Actions": [1]},
            })),
        )
        .unwrap();
        assert_eq!(c.generation(), None);
        assert_eq!(c.memory().unwrap().len(), 1);
    }
}
