//! ChainMap — a stack of maps searched innermost first.
//!
//! Lookups walk the layers in order. Unlike a plain overlay, writes and
//! deletes go to the first layer that already holds the key, so an update
//! to an inherited value changes it where it lives.

use crate::error::{QuarryError, Result};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct ChainMap<K, V> {
    /// Index 0 is the innermost layer.
    layers: Vec<HashMap<K, V>>,
}

impl<K, V> Default for ChainMap<K, V> {
    fn default() -> Self {
        Self {
            layers: vec![HashMap::new()],
        }
    }
}

impl<K, V> ChainMap<K, V>
where
    K: Eq + Hash + Debug,
{
    /// A chain with one empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain over `layers`, innermost first. An empty list gets one empty layer.
    pub fn from_layers(layers: Vec<HashMap<K, V>>) -> Self {
        if layers.is_empty() {
            return Self::default();
        }
        Self { layers }
    }

    pub fn layers(&self) -> &[HashMap<K, V>] {
        &self.layers
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.layers.iter().any(|layer| layer.contains_key(key))
    }

    /// Update `key` in the first layer holding it, else insert it into the
    /// innermost layer. Returns the replaced value, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.contains_key(&key)) {
            return layer.insert(key, value);
        }
        self.layers[0].insert(key, value)
    }

    /// Remove `key` from the first layer holding it.
    ///
    /// Outer layers that also hold the key keep their entry, so the key may
    /// still be visible afterwards.
    pub fn remove(&mut self, key: &K) -> Result<V> {
        self.layers
            .iter_mut()
            .find_map(|layer| layer.remove(key))
            .ok_or_else(|| QuarryError::KeyNotFound(format!("{:?}", key)))
    }

    /// Push a fresh innermost layer.
    pub fn new_child(&mut self) {
        self.layers.insert(0, HashMap::new());
    }

    /// The chain without its innermost layer, or `None` for a single-layer chain.
    pub fn parents(&self) -> Option<Self>
    where
        K: Clone,
        V: Clone,
    {
        if self.layers.len() < 2 {
            return None;
        }
        Some(Self {
            layers: self.layers[1..].to_vec(),
        })
    }

    /// Distinct visible keys.
    pub fn keys(&self) -> Vec<&K> {
        let mut seen = HashSet::new();
        self.layers
            .iter()
            .flat_map(HashMap::keys)
            .filter(|key| seen.insert(*key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(HashMap::is_empty)
    }
}
