// Integration tests for planet catalog invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use space_cat::board::{PLANETS, journey};

#[test]
fn planet_ids_are_unique() {
    let mut seen = HashSet::new();
    for p in PLANETS.iter() {
        assert!(seen.insert(p.id), "duplicate planet id {}", p.id);
    }
    assert_eq!(PLANETS.len(), 4);
}

#[test]
fn answers_are_authored_normalized() {
    for p in PLANETS.iter() {
        assert!(!p.answer.is_empty(), "empty answer for '{}'", p.name);
        assert_eq!(p.answer, p.answer.trim(), "answer for '{}' has outer whitespace", p.name);
        assert_eq!(p.answer, p.answer.to_lowercase(), "answer for '{}' is not lowercase", p.name);
    }
}

#[test]
fn positions_are_inside_the_stage() {
    for p in PLANETS.iter() {
        assert!((0.0..=100.0).contains(&p.position.x), "x out of range for '{}'", p.name);
        assert!((0.0..=100.0).contains(&p.position.y), "y out of range for '{}'", p.name);
    }
}

#[test]
fn journey_starts_unsolved_in_display_order() {
    let planets = journey();
    assert!(planets.iter().all(|p| !p.completed));
    let ids: Vec<u32> = planets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}
