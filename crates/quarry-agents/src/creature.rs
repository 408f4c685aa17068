//! Creature — one record for every agent kind.
//!
//! A creature is a plain agent, a predator or a prey, and predators and
//! prey may additionally carry an orientation. Instead of a class per
//! combination, the record holds the shared fields directly, a [`Role`]
//! for the species-specific ones and an optional [`Orientation`].
//!
//! All writes go through validating setters. A rejected write returns an
//! error and leaves the creature exactly as it was.

use quarry_core::error::{QuarryError, Result};
use quarry_core::memory::{Action, Memory, State};
use quarry_core::orientation::Orientation;
use quarry_core::tools::ident::UUID_LENGTH;
use quarry_core::types::{Field, Kind};
use quarry_core::validate::{self, WriteOnce};
use rand::Rng;
use serde_json::{json, Map, Value};
use std::fmt;
use tracing::trace;

/// Species-specific state.
#[derive(Debug, Clone, PartialEq)]
pub enum Role {
    /// A plain agent with no species behaviour.
    Neutral,
    Predator {
        /// Probability of eating prey it meets.
        p_eat: f64,
    },
    Prey {
        /// Probability of escaping a predator.
        p_flee: f64,
        /// Per-individual flag, never inherited.
        got_eaten: bool,
    },
}

impl Role {
    pub(crate) fn for_kind(kind: Kind) -> Self {
        match kind {
            Kind::Agent => Role::Neutral,
            Kind::Predator | Kind::OrientedPredator => Role::Predator { p_eat: 0.0 },
            Kind::Prey | Kind::OrientedPrey => Role::Prey {
                p_flee: 0.0,
                got_eaten: false,
            },
        }
    }
}

/// A predator-prey agent.
#[derive(Debug, Clone)]
pub struct Creature {
    pub(crate) kind: Kind,
    pub(crate) uuid: WriteOnce<String>,
    pub(crate) food_reserve: f64,
    pub(crate) max_food_reserve: WriteOnce<f64>,
    pub(crate) generation: WriteOnce<u64>,
    pub(crate) p_breed: f64,
    pub(crate) kin: String,
    pub(crate) memory: WriteOnce<Memory>,
    pub(crate) memory_limit: Option<usize>,
    pub(crate) role: Role,
    pub(crate) orient: Option<Orientation>,
    pub(crate) extras: Map<String, Value>,
}

fn log_rejection(field: Field) -> impl Fn(&QuarryError) {
    move |e: &QuarryError| trace!(field = field.name(), kind = %e.kind(), "rejected write: {}", e)
}

impl Creature {
    /// An unvalidated shell with every field at its default. Only the
    /// builder uses this, and it writes all fields through the setters.
    pub(crate) fn blank(kind: Kind) -> Self {
        Self {
            kind,
            uuid: WriteOnce::new(),
            food_reserve: 0.0,
            max_food_reserve: WriteOnce::new(),
            generation: WriteOnce::new(),
            p_breed: 1.0,
            kin: kind.name().to_string(),
            memory: WriteOnce::new(),
            memory_limit: None,
            role: Role::for_kind(kind),
            orient: None,
            extras: Map::new(),
        }
    }

    // Accessors -------------------------------------------------------------

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn uuid(&self) -> &str {
        self.uuid.get().map_or("", String::as_str)
    }

    pub fn food_reserve(&self) -> f64 {
        self.food_reserve
    }

    pub fn max_food_reserve(&self) -> Option<f64> {
        self.max_food_reserve.copied()
    }

    pub fn generation(&self) -> Option<u64> {
        self.generation.copied()
    }

    pub fn p_breed(&self) -> f64 {
        self.p_breed
    }

    pub fn kin(&self) -> &str {
        &self.kin
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn p_eat(&self) -> Option<f64> {
        match self.role {
            Role::Predator { p_eat } => Some(p_eat),
            _ => None,
        }
    }

    pub fn p_flee(&self) -> Option<f64> {
        match self.role {
            Role::Prey { p_flee, .. } => Some(p_flee),
            _ => None,
        }
    }

    pub fn got_eaten(&self) -> Option<bool> {
        match self.role {
            Role::Prey { got_eaten, .. } => Some(got_eaten),
            _ => None,
        }
    }

    pub fn orient(&self) -> Option<Orientation> {
        self.orient
    }

    pub fn memory(&self) -> Option<&Memory> {
        self.memory.get()
    }

    /// In-place access to the memory sequences. Replacing the whole record
    /// is not possible once it is set.
    pub fn memory_mut(&mut self) -> Option<&mut Memory> {
        self.memory.get_mut()
    }

    pub fn memory_limit(&self) -> Option<usize> {
        self.memory_limit
    }

    /// An extension field retained from construction.
    pub fn extra(&self, name: &str) -> Option<&Value> {
        self.extras.get(name)
    }

    pub fn extras(&self) -> &Map<String, Value> {
        &self.extras
    }

    pub fn is_predator(&self) -> bool {
        matches!(self.role, Role::Predator { .. })
    }

    pub fn is_prey(&self) -> bool {
        matches!(self.role, Role::Prey { .. })
    }

    // Validated setters -----------------------------------------------------

    /// Set the food reserve, clamped to `max_food_reserve` when that is set.
    pub fn set_food_reserve(&mut self, food_reserve: f64) -> Result<()> {
        let value = validate::non_negative(Field::FoodReserve.name(), food_reserve)
            .inspect_err(log_rejection(Field::FoodReserve))?;
        self.food_reserve = match self.max_food_reserve.copied() {
            Some(max) => value.min(max),
            None => value,
        };
        Ok(())
    }

    /// Set the food ceiling. Write-once; must not lie below the current reserve.
    pub fn set_max_food_reserve(&mut self, max_food_reserve: f64) -> Result<()> {
        let field = Field::MaxFoodReserve;
        self.ensure_unset(field, self.max_food_reserve.is_set())?;
        let value = validate::ceiling(field.name(), max_food_reserve, self.food_reserve)
            .inspect_err(log_rejection(field))?;
        self.max_food_reserve.set(field.name(), value)
    }

    /// Set the generation. Write-once, including for generation 0.
    pub fn set_generation(&mut self, generation: u64) -> Result<()> {
        let field = Field::Generation;
        self.ensure_unset(field, self.generation.is_set())?;
        self.generation.set(field.name(), generation)
    }

    pub fn set_p_breed(&mut self, p_breed: f64) -> Result<()> {
        self.p_breed = validate::probability(Field::PBreed.name(), p_breed)
            .inspect_err(log_rejection(Field::PBreed))?;
        Ok(())
    }

    pub fn set_kin(&mut self, kin: impl Into<String>) {
        self.kin = kin.into();
    }

    /// Set the memory record. Write-once; creatures get one at construction.
    pub fn set_memory(&mut self, memory: Memory) -> Result<()> {
        let field = Field::Memory;
        self.ensure_unset(field, self.memory.is_set())?;
        self.memory.set(field.name(), memory)
    }

    /// Set the identifier. Write-once; at least [`UUID_LENGTH`] characters.
    pub fn set_uuid(&mut self, uuid: impl Into<String>) -> Result<()> {
        let field = Field::Uuid;
        self.ensure_unset(field, self.uuid.is_set())?;
        let uuid = uuid.into();
        validate::min_len(field.name(), &uuid, UUID_LENGTH).inspect_err(log_rejection(field))?;
        self.uuid.set(field.name(), uuid)
    }

    pub fn set_p_eat(&mut self, value: f64) -> Result<()> {
        let field = Field::PEat;
        self.ensure_has(field)?;
        let value =
            validate::probability(field.name(), value).inspect_err(log_rejection(field))?;
        if let Role::Predator { p_eat } = &mut self.role {
            *p_eat = value;
        }
        Ok(())
    }

    pub fn set_p_flee(&mut self, value: f64) -> Result<()> {
        let field = Field::PFlee;
        self.ensure_has(field)?;
        let value =
            validate::probability(field.name(), value).inspect_err(log_rejection(field))?;
        if let Role::Prey { p_flee, .. } = &mut self.role {
            *p_flee = value;
        }
        Ok(())
    }

    pub fn set_got_eaten(&mut self, value: bool) -> Result<()> {
        self.ensure_has(Field::GotEaten)?;
        if let Role::Prey { got_eaten, .. } = &mut self.role {
            *got_eaten = value;
        }
        Ok(())
    }

    pub fn set_orient(&mut self, orient: Orientation) -> Result<()> {
        self.ensure_has(Field::Orient)?;
        self.orient = Some(orient);
        Ok(())
    }

    /// Draw a fresh orientation.
    pub fn reorient<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Orientation> {
        let orient = Orientation::random(rng);
        self.set_orient(orient)?;
        Ok(orient)
    }

    /// Append one transition to memory, dropping the oldest ones beyond
    /// `memory_limit`.
    pub fn remember(&mut self, state: State, reward: f64, action: Action) {
        let limit = self.memory_limit;
        if let Some(memory) = self.memory.get_mut() {
            memory.remember(state, reward, action);
            if let Some(limit) = limit {
                memory.truncate_front(limit);
            }
        }
    }

    fn ensure_unset(&self, field: Field, is_set: bool) -> Result<()> {
        if is_set {
            let err = QuarryError::state(field.name());
            log_rejection(field)(&err);
            return Err(err);
        }
        Ok(())
    }

    /// Fields that only exist on some kinds are a type error elsewhere.
    pub(crate) fn ensure_has(&self, field: Field) -> Result<()> {
        if self.kind.has_field(field) {
            return Ok(());
        }
        let expected = match field {
            Field::PEat => "a predator",
            Field::PFlee | Field::GotEaten => "a prey",
            _ => "an oriented creature",
        };
        let err = QuarryError::type_mismatch(field.name(), expected, self.kind.name());
        log_rejection(field)(&err);
        Err(err)
    }

    // Diagnostics -----------------------------------------------------------

    /// Every field, including extension fields, as a JSON object.
    pub fn snapshot(&self) -> Value {
        let mut obj = json!({
            "kind": self.kind.name(),
            "uuid": self.uuid(),
            "kin": self.kin,
            "food_reserve": self.food_reserve,
            "max_food_reserve": self.max_food_reserve(),
            "generation": self.generation(),
            "p_breed": self.p_breed,
            "memory": self.memory(),
        });
        if let Value::Object(map) = &mut obj {
            if let Some(p) = self.p_eat() {
                map.insert("p_eat".into(), json!(p));
            }
            if let Some(p) = self.p_flee() {
                map.insert("p_flee".into(), json!(p));
            }
            if let Some(eaten) = self.got_eaten() {
                map.insert("got_eaten".into(), json!(eaten));
            }
            if let Some(o) = self.orient {
                map.insert("orient".into(), json!(o.as_array()));
            }
            if !self.extras.is_empty() {
                map.insert("extras".into(), Value::Object(self.extras.clone()));
            }
        }
        obj
    }
}

fn opt<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (kin: {}, generation: {}, food_reserve: {}, max_food_reserve: {}, p_breed: {}",
            self.kind,
            self.kin,
            opt(self.generation()),
            self.food_reserve,
            opt(self.max_food_reserve()),
            self.p_breed,
        )?;
        match self.role {
            Role::Neutral => {}
            Role::Predator { p_eat } => write!(f, ", p_eat: {}", p_eat)?,
            Role::Prey { p_flee, got_eaten } => {
                write!(f, ", p_flee: {}, got_eaten: {}", p_flee, got_eaten)?
            }
        }
        if let Some(o) = self.orient {
            write!(f, ", orient: {}", o)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::error::ErrorKind;

    fn predator() -> Creature {
        Creature::builder(Kind::Predator, 5.0)
            .max_food_reserve(10.0)
            .p_eat(0.3)
            .build()
            .unwrap()
    }

    #[test]
    fn food_is_clamped_to_ceiling() {
        let mut c = predator();
        c.set_food_reserve(25.0).unwrap();
        assert_eq!(c.food_reserve(), 10.0);
        c.set_food_reserve(0.0).unwrap();
        assert_eq!(c.food_reserve(), 0.0);
    }

    #[test]
    fn negative_food_leaves_value_untouched() {
        let mut c = predator();
        let err = c.set_food_reserve(-1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueKind);
        assert_eq!(c.food_reserve(), 5.0);
    }

    #[test]
    fn ceiling_is_locked_after_first_write() {
        let mut c = predator();
        for v in [5.0, 10.0, 100.0, 1.0, -3.0] {
            assert_eq!(c.set_max_food_reserve(v).unwrap_err().kind(), ErrorKind::StateKind);
        }
        assert_eq!(c.max_food_reserve(), Some(10.0));
    }

    #[test]
    fn ceiling_below_reserve_is_rejected() {
        let mut c = Creature::builder(Kind::Agent, 8.0).build().unwrap();
        assert_eq!(c.set_max_food_reserve(7.0).unwrap_err().kind(), ErrorKind::ValueKind);
        assert_eq!(c.max_food_reserve(), None);
        c.set_max_food_reserve(8.0).unwrap();
        assert_eq!(c.max_food_reserve(), Some(8.0));
    }

    #[test]
    fn generation_zero_is_locked() {
        let mut c = Creature::builder(Kind::Prey, 1.0).generation(0).build().unwrap();
        assert_eq!(c.set_generation(4).unwrap_err().kind(), ErrorKind::StateKind);
        assert_eq!(c.generation(), Some(0));
    }

    #[test]
    fn unset_generation_can_be_written_once() {
        let mut c = Creature::builder(Kind::Prey, 1.0).build().unwrap();
        assert_eq!(c.generation(), None);
        c.set_generation(2).unwrap();
        assert!(c.set_generation(3).is_err());
    }

    #[test]
    fn memory_cannot_be_replaced_but_can_grow() {
        let mut c = predator();
        assert_eq!(c.set_memory(Memory::new()).unwrap_err().kind(), ErrorKind::StateKind);
        c.remember(vec![1.0, 0.0], 1.0, 3);
        c.memory_mut().unwrap().rewards[0] = 2.0;
        assert_eq!(c.memory().unwrap().rewards, vec![2.0]);
    }

    #[test]
    fn memory_limit_rolls_old_transitions_out() {
        let mut c = Creature::builder(Kind::Agent, 1.0).memory_limit(3).build().unwrap();
        for i in 0..10 {
            c.remember(vec![i as f64], 0.0, i);
        }
        assert_eq!(c.memory().unwrap().actions, vec![7, 8, 9]);
    }

    #[test]
    fn role_fields_belong_to_their_kind() {
        let mut c = predator();
        assert_eq!(c.set_p_flee(0.5).unwrap_err().kind(), ErrorKind::TypeKind);
        assert_eq!(c.set_got_eaten(true).unwrap_err().kind(), ErrorKind::TypeKind);
        assert_eq!(
            c.set_orient(Orientation::UP).unwrap_err().kind(),
            ErrorKind::TypeKind
        );
        assert_eq!(c.p_flee(), None);
        assert_eq!(c.orient(), None);
    }

    #[test]
    fn uuid_is_locked() {
        let mut c = predator();
        assert!(c.uuid().starts_with("J_"));
        let err = c.set_uuid("J_0123456789abcdef0123456789abcdef").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StateKind);
    }

    #[test]
    fn kin_is_free_text() {
        let mut c = predator();
        c.set_kin("Wolf");
        assert_eq!(c.kin(), "Wolf");
        c.set_kin("");
        assert_eq!(c.kin(), "");
    }

    #[test]
    fn snapshot_carries_role_fields() {
        let c = Creature::builder(Kind::OrientedPrey, 2.0)
            .orient(Orientation::LEFT)
            .p_flee(0.25)
            .build()
            .unwrap();
        let s = c.snapshot();
        assert_eq!(s["kind"], "OrientedPrey");
        assert_eq!(s["p_flee"], 0.25);
        assert_eq!(s["got_eaten"], false);
        assert_eq!(s["orient"], json!([-1, 0]));
        assert!(s.get("p_eat").is_none());
        assert_eq!(s["generation"], Value::Null);
    }
}
