//! Procreation — creating offspring from a parent creature.
//!
//! An offspring is a fresh creature of the parent's kind, built with only
//! the food reserve it is given. Each field in the kind's heirship list is
//! then copied over, with the generation advanced by one. Write-once fields
//! are copied whenever they are set, zero included; the reassignable ones
//! only when they hold a non-zero, non-empty value. Everything else
//! (orientation, the eaten flag, memory, identifier, extension fields)
//! starts from the constructor defaults.

use crate::creature::Creature;
use quarry_core::error::{QuarryError, Result};
use quarry_core::types::Field;
use rand::Rng;
use serde_json::{json, Value};
use tracing::debug;

/// Zero numbers, empty strings and `false` are left at the offspring's default.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

impl Creature {
    /// Create an offspring holding `food_reserve`.
    ///
    /// Fails if `food_reserve` is invalid, or exceeds the ceiling the
    /// offspring inherits. The parent is never modified.
    pub fn procreate(&self, food_reserve: f64) -> Result<Creature> {
        self.procreate_with(&mut rand::thread_rng(), food_reserve)
    }

    /// As [`procreate`](Self::procreate), drawing the offspring's
    /// orientation from `rng`.
    pub fn procreate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        food_reserve: f64,
    ) -> Result<Creature> {
        let mut child = Creature::builder(self.kind, food_reserve).build_with(rng)?;

        for field in self.kind.heirship() {
            let Some(value) = self.get_field(field.name()) else {
                continue;
            };
            if !field.is_write_once() && is_blank(&value) {
                continue;
            }
            let value = match (field, self.generation()) {
                (Field::Generation, Some(g)) => {
                    let next = g.checked_add(1).ok_or_else(|| {
                        QuarryError::value(field.name(), "below u64::MAX to breed", g)
                    })?;
                    json!(next)
                }
                _ => value,
            };
            child.set_field(field.name(), &value)?;
        }

        debug!(
            kind = self.kind.name(),
            parent = self.uuid(),
            child = child.uuid(),
            generation = ?child.generation(),
            "offspring created"
        );
        Ok(child)
    }

    /// Roll against `p_breed`.
    pub fn wants_to_breed<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.gen_bool(self.p_breed)
    }
}
