//! Utility collaborator tests through the public prelude.

use quarry_core::prelude::*;
use serde_json::json;
use std::collections::HashMap;

#[test]
fn counted_identifier_generation() {
    let ident = Counted::new(|species: Option<&str>| generate_uuid(species));
    let ids: Vec<String> = ["predator", "prey", "predator"]
        .iter()
        .map(|s| ident.call(Some(*s)).unwrap())
        .collect();
    assert_eq!(ident.calls(), 3);
    assert!(ids[0].starts_with("J_") && ids[2].starts_with("J_"));
    assert!(ids[1].starts_with("B_"));

    assert!(ident.call(Some("lichen")).is_err());
    assert_eq!(ident.calls(), 4, "failed calls still count");
}

#[test]
fn keyword_check_guards_species_lookup() {
    let lookup = require_kwarg("species", JsonKind::String, |kw: &Kwargs| {
        generate_uuid(kw["species"].as_str())
    });

    let mut kw = Kwargs::new();
    assert_eq!(lookup(&kw).unwrap_err().kind(), ErrorKind::MissingArgumentKind);

    kw.insert("species".into(), json!(1));
    assert_eq!(lookup(&kw).unwrap_err().kind(), ErrorKind::TypeKind);

    kw.insert("species".into(), json!("cactus"));
    assert_eq!(lookup(&kw).unwrap_err().kind(), ErrorKind::UnknownSpeciesKind);

    kw.insert("species".into(), json!("prey"));
    assert_eq!(lookup(&kw).unwrap().len(), UUID_LENGTH);
}

#[test]
fn chain_map_scopes() {
    let defaults = HashMap::from([("p_breed", 1.0), ("p_eat", 0.5)]);
    let mut scopes = ChainMap::from_layers(vec![HashMap::new(), defaults]);

    scopes.insert("p_flee", 0.2);
    scopes.insert("p_eat", 0.9);
    assert_eq!(scopes.layers()[0].len(), 1);
    assert_eq!(scopes.get(&"p_eat"), Some(&0.9));

    scopes.remove(&"p_eat").unwrap();
    assert!(!scopes.contains_key(&"p_eat"));
    assert_eq!(
        scopes.remove(&"p_eat").unwrap_err(),
        QuarryError::KeyNotFound("\"p_eat\"".into())
    );
}

#[test]
fn timestamps_move_forward() {
    let first = now();
    let text = timestamp();
    assert!(now() >= first);
    assert_eq!(text.len(), "2026-01-01 00:00:00.000000".len());
    assert!(matches!(stamp(true), Stamp::At(_)));
}
