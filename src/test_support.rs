//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::App;
use crate::source::Country;

/// A country with just the fields the pipeline cares about.
pub fn country(name: &str, population: u64) -> Country {
    Country {
        name: name.to_string(),
        alpha3_code: name.chars().take(3).collect::<String>().to_uppercase(),
        population,
        ..Country::default()
    }
}

/// `n` countries with distinct names and strictly increasing populations.
pub fn collection(n: usize) -> Vec<Country> {
    (1..=n)
        .map(|i| country(&format!("Country {:02}", i), (i as u64) * 1_000))
        .collect()
}

/// Three records whose names all contain "c" but whose population order
/// differs from their name order.
pub fn sample_trio() -> Vec<Country> {
    vec![
        country("Chad", 100),
        country("Canada", 300),
        country("Cuba", 200),
    ]
}

/// Creates a fresh App the way startup does, before any fetch resolves.
pub fn test_app() -> App {
    App::new("test-source")
}
