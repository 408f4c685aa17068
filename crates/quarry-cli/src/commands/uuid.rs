//! Generate species-tagged identifiers.

use anyhow::Result;
use quarry::prelude::*;

pub fn run(species: Option<String>, count: usize) -> Result<()> {
    for _ in 0..count {
        println!("{}", generate_uuid(species.as_deref())?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_species() {
        run(Some("predator".to_string()), 2).unwrap();
        run(None, 1).unwrap();
        let err = run(Some("fox".to_string()), 1).unwrap_err();
        let cause = err.downcast_ref::<QuarryError>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::UnknownSpeciesKind);
    }
}
