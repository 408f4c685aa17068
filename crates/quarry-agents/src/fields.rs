//! Field access by name, for loosely typed callers.
//!
//! `set_field` runs the full validation order: kind of the value, then the
//! typed setter (lock, range, commit). Procreation copies heritable fields
//! through this path too.

use crate::creature::Creature;
use quarry_core::error::{QuarryError, Result};
use quarry_core::memory::Memory;
use quarry_core::orientation::Orientation;
use quarry_core::types::Field;
use quarry_core::validate::{
    expect_bool, expect_count, expect_kind, expect_number, expect_str, JsonKind,
};
use serde_json::{json, Value};

/// Parse a memory record given as `{"States": .., "Rewards": .., "Actions": ..}`.
pub fn memory_from_value(value: &Value) -> Result<Memory> {
    let field = Field::Memory.name();
    expect_kind(field, value, JsonKind::Object)?;
    serde_json::from_value(value.clone()).map_err(|e| {
        QuarryError::value(field, "a record of States, Rewards and Actions", e)
    })
}

/// Parse an orientation given as a two-element array.
pub fn orientation_from_value(value: &Value) -> Result<Orientation> {
    let field = Field::Orient.name();
    expect_kind(field, value, JsonKind::Array)?;
    let parts = value.as_array().map(Vec::as_slice).unwrap_or_default();
    let pair: Vec<i8> = parts
        .iter()
        .filter_map(|p| p.as_i64().and_then(|n| i8::try_from(n).ok()))
        .collect();
    if parts.len() != 2 || pair.len() != 2 {
        return Err(QuarryError::value(field, "a pair of integers", value));
    }
    Orientation::new(pair[0], pair[1])
}

impl Creature {
    /// Current value of a field, or of an extension field, by name.
    ///
    /// Returns `None` for fields this kind does not have and for
    /// write-once fields that are not set yet.
    pub fn get_field(&self, name: &str) -> Option<Value> {
        let Some(field) = Field::from_name(name) else {
            return self.extras.get(name).cloned();
        };
        if !self.kind.has_field(field) {
            return None;
        }
        match field {
            Field::FoodReserve => Some(json!(self.food_reserve())),
            Field::MaxFoodReserve => self.max_food_reserve().map(|v| json!(v)),
            Field::Generation => self.generation().map(|v| json!(v)),
            Field::PBreed => Some(json!(self.p_breed())),
            Field::Kin => Some(json!(self.kin())),
            Field::Memory => self.memory().map(|m| json!(m)),
            Field::Uuid => Some(json!(self.uuid())),
            Field::PEat => self.p_eat().map(|v| json!(v)),
            Field::PFlee => self.p_flee().map(|v| json!(v)),
            Field::GotEaten => self.got_eaten().map(|v| json!(v)),
            Field::Orient => self.orient().map(|o| json!(o.as_array())),
        }
    }

    /// Write a field by name through the validating setter.
    ///
    /// Unknown names are stored as extension fields without validation.
    pub fn set_field(&mut self, name: &str, value: &Value) -> Result<()> {
        let Some(field) = Field::from_name(name) else {
            self.extras.insert(name.to_string(), value.clone());
            return Ok(());
        };
        self.ensure_has(field)?;
        match field {
            Field::FoodReserve => self.set_food_reserve(expect_number(name, value)?),
            Field::MaxFoodReserve => self.set_max_food_reserve(expect_number(name, value)?),
            Field::Generation => self.set_generation(expect_count(name, value)?),
            Field::PBreed => self.set_p_breed(expect_number(name, value)?),
            Field::Kin => {
                self.set_kin(expect_str(name, value)?);
                Ok(())
            }
            Field::Memory => self.set_memory(memory_from_value(value)?),
            Field::Uuid => self.set_uuid(expect_str(name, value)?),
            Field::PEat => self.set_p_eat(expect_number(name, value)?),
            Field::PFlee => self.set_p_flee(expect_number(name, value)?),
            Field::GotEaten => self.set_got_eaten(expect_bool(name, value)?),
            Field::Orient => self.set_orient(orientation_from_value(value)?),
        }
    }
}
