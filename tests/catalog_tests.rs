//! Catalog collection: seed integrity, prepend ordering, reset, revisions.

use pretty_assertions::assert_eq;
use promptarch::app::catalog::{seed_catalog, AiPrompt, PromptCatalog, PromptCategory};

fn sample_entry(id: &str) -> AiPrompt {
    AiPrompt {
        id: id.to_string(),
        title: "Sample".to_string(),
        description: "Sample entry".to_string(),
        prompt: "A sample prompt".to_string(),
        short_preview: "A sample prompt...".to_string(),
        image_url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        category: PromptCategory::Poster,
        author: "Tester".to_string(),
        date: "2024-06-01".to_string(),
        tips: Vec::new(),
    }
}

#[test]
fn seed_catalog_matches_the_fixed_data_set() {
    let seed = seed_catalog();

    let ids: Vec<&str> = seed.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "5", "2", "3", "4"]);

    let categories: Vec<PromptCategory> = seed.iter().map(|p| p.category).collect();
    assert_eq!(
        categories,
        vec![
            PromptCategory::Product,
            PromptCategory::Photographs,
            PromptCategory::Logo,
            PromptCategory::Fashion,
            PromptCategory::Portrait,
        ]
    );

    for entry in &seed {
        assert!(!entry.title.is_empty());
        assert!(!entry.prompt.is_empty());
        assert!(!entry.image_url.is_empty());
        assert_eq!(entry.tips.len(), 2);
    }
}

#[test]
fn prepend_puts_the_new_entry_first_and_keeps_seed_order() {
    let mut catalog = PromptCatalog::seeded();
    let before: Vec<String> = catalog.entries().iter().map(|p| p.id.clone()).collect();

    catalog.prepend(sample_entry("new"));

    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.entries()[0].id, "new");
    let after: Vec<String> = catalog.entries()[1..]
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(after, before);
}

#[test]
fn prepend_bumps_the_revision() {
    let mut catalog = PromptCatalog::seeded();
    assert_eq!(catalog.revision(), 0);

    catalog.prepend(sample_entry("a"));
    assert_eq!(catalog.revision(), 1);

    catalog.prepend(sample_entry("b"));
    assert_eq!(catalog.revision(), 2);
}

#[test]
fn duplicate_ids_are_refused() {
    let mut catalog = PromptCatalog::seeded();
    catalog.prepend(sample_entry("1")); // collides with a seed id

    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.revision(), 0);
}

#[test]
fn get_and_contains_find_entries_by_id() {
    let catalog = PromptCatalog::seeded();

    assert!(catalog.contains_id("3"));
    assert!(!catalog.contains_id("99"));
    assert_eq!(
        catalog.get("5").map(|p| p.title.as_str()),
        Some("Ethereal Mountain Landscape")
    );
    assert!(catalog.get("99").is_none());
}

#[test]
fn reset_restores_the_seed_set() {
    let mut catalog = PromptCatalog::seeded();
    catalog.prepend(sample_entry("published"));
    assert_eq!(catalog.len(), 6);

    catalog.reset();

    assert_eq!(catalog.len(), 5);
    assert!(!catalog.contains_id("published"));
    assert_eq!(catalog.entries()[0].id, "1");
}

#[test]
fn empty_catalog_reports_empty() {
    let catalog = PromptCatalog::empty();
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[test]
fn entries_round_trip_through_json() {
    let seed = seed_catalog();
    let json = serde_json::to_string(&seed).unwrap();
    let back: Vec<AiPrompt> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, seed);
}
