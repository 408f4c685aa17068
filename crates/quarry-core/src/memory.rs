//! Memory — the rolling transition log an agent feeds to its learner.
//!
//! Each transition is one observed state, the reward received and the
//! action taken. The three sequences always have the same length.

use serde::{Deserialize, Serialize};

/// An observation vector as seen by the actor-critic network.
pub type State = Vec<f64>;

/// Index into the learner's discrete action space.
pub type Action = usize;

/// Ordered log of states, rewards and actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    #[serde(rename = "States", default)]
    pub states: Vec<State>,
    #[serde(rename = "Rewards", default)]
    pub rewards: Vec<f64>,
    #[serde(rename = "Actions", default)]
    pub actions: Vec<Action>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one transition.
    pub fn remember(&mut self, state: State, reward: f64, action: Action) {
        self.states.push(state);
        self.rewards.push(reward);
        self.actions.push(action);
    }

    /// Drop the oldest entries until no sequence is longer than `limit`.
    pub fn truncate_front(&mut self, limit: usize) {
        fn trim<T>(v: &mut Vec<T>, limit: usize) {
            if v.len() > limit {
                let excess = v.len() - limit;
                v.drain(..excess);
            }
        }
        trim(&mut self.states, limit);
        trim(&mut self.rewards, limit);
        trim(&mut self.actions, limit);
    }

    /// Number of complete transitions.
    pub fn len(&self) -> usize {
        self.states
            .len()
            .min(self.rewards.len())
            .min(self.actions.len())
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.rewards.is_empty() && self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.states.clear();
        self.rewards.clear();
        self.actions.clear();
    }

    pub fn last_reward(&self) -> Option<f64> {
        self.rewards.last().copied()
    }

    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }
}
