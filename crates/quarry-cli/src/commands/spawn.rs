//! Build a single creature and show it.

use anyhow::{Context, Result};
use quarry::prelude::*;

use crate::config::Config;

pub fn run(
    config: &Config,
    kind: &str,
    food: Option<f64>,
    generation: Option<u64>,
    json: bool,
) -> Result<()> {
    let kind: Kind = kind.parse()?;
    let mut builder = config.builder_for(kind, food);
    if let Some(generation) = generation {
        builder = builder.generation(generation);
    }
    let creature = builder
        .build()
        .with_context(|| format!("Failed to build {}", kind))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&creature.snapshot())?);
    } else {
        println!("{}", creature);
        println!("  uuid: {}", creature.uuid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_each_kind() {
        let config = Config::default();
        for kind in ["agent", "prey", "oriented-predator"] {
            run(&config, kind, Some(1.0), Some(4), false).unwrap();
            run(&config, kind, None, None, true).unwrap();
        }
    }

    #[test]
    fn food_above_ceiling_fails_with_context() {
        let config = Config::default();
        let food = config.agent.max_food_reserve + 5.0;
        let err = run(&config, "prey", Some(food), None, false).unwrap_err();
        assert_eq!(err.to_string(), "Failed to build Prey");
        let cause = err.root_cause().downcast_ref::<QuarryError>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::ValueKind);
    }
}
