//! Gallery controller state machine: derived filtering, publishing flow,
//! detail selection, session reset.

use pretty_assertions::assert_eq;
use promptarch::app::catalog::PromptCategory;
use promptarch::app::archui::FocusableWindow;
use promptarch::app::publisher::{DraftRejection, PromptDraft};
use promptarch::ArchitectApp;

fn valid_draft() -> PromptDraft {
    PromptDraft {
        title: "Neon Alley Poster".to_string(),
        prompt: "Poster artwork of a neon alley at night, retro futurism".to_string(),
        category: PromptCategory::Poster,
        image_data: Some("data:image/png;base64,iVBORw0KGgo=".to_string()),
    }
}

#[test]
fn starts_with_the_seed_catalog_and_no_filters() {
    let app = ArchitectApp::default();

    assert_eq!(app.catalog.len(), 5);
    assert_eq!(app.selected_category, PromptCategory::All);
    assert_eq!(app.search_query, "");
    assert_eq!(app.visible_prompts().len(), 5);
    assert!(app.detail_window.selected().is_none());
}

#[test]
fn category_then_search_then_reset_walks_the_expected_result_counts() {
    let mut app = ArchitectApp::default();

    app.set_category(PromptCategory::Photographs);
    let visible = app.visible_prompts();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Ethereal Mountain Landscape");

    app.set_search_query("nonexistent");
    assert!(app.visible_prompts().is_empty());

    app.set_search_query("");
    assert_eq!(app.visible_prompts().len(), 1);
}

#[test]
fn filtering_is_recomputed_after_a_publish() {
    let mut app = ArchitectApp::default();
    app.set_category(PromptCategory::Poster);
    assert!(app.visible_prompts().is_empty());

    app.submit_draft(valid_draft()).unwrap();

    let visible = app.visible_prompts();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Neon Alley Poster");
}

#[test]
fn accepted_draft_is_prepended_and_confirmed() {
    let mut app = ArchitectApp::default();
    app.publish_window.open_window();
    let before: Vec<String> = app
        .catalog
        .entries()
        .iter()
        .map(|p| p.id.clone())
        .collect();

    app.submit_draft(valid_draft()).unwrap();

    assert_eq!(app.catalog.len(), 6);
    let head = &app.catalog.entries()[0];
    assert_eq!(head.category, PromptCategory::Poster);
    assert!(head.short_preview.ends_with("..."));
    assert!(!before.contains(&head.id));

    let tail: Vec<String> = app.catalog.entries()[1..]
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(tail, before);

    assert!(!app.publish_window.is_open());
    assert_eq!(app.toast.active(), Some("Prompt published successfully!"));
}

#[test]
fn rejected_draft_changes_nothing_but_reports_why() {
    let mut app = ArchitectApp::default();
    app.publish_window.open_window();
    let before: Vec<String> = app
        .catalog
        .entries()
        .iter()
        .map(|p| p.id.clone())
        .collect();

    let draft = PromptDraft {
        title: String::new(),
        ..valid_draft()
    };
    let result = app.submit_draft(draft);

    assert_eq!(result, Err(DraftRejection::EmptyTitle));
    let after: Vec<String> = app
        .catalog
        .entries()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    assert_eq!(after, before);
    // The publish window stays open so the user can fix the draft
    assert!(app.publish_window.is_open());
    assert_eq!(
        app.toast.active(),
        Some(DraftRejection::EmptyTitle.to_string().as_str())
    );
}

#[test]
fn copy_confirms_through_the_toast() {
    let mut app = ArchitectApp::default();
    let ctx = egui::Context::default();
    let prompt = app.catalog.entries()[0].clone();

    app.copy_prompt_text(&ctx, &prompt);

    assert_eq!(app.toast.active(), Some("Directive Copied"));
    // Copying never mutates the catalog
    assert_eq!(app.catalog.len(), 5);
    assert_eq!(app.catalog.revision(), 0);
}

#[test]
fn detail_selection_opens_and_closes() {
    let mut app = ArchitectApp::default();
    let prompt = app.catalog.entries()[2].clone();

    app.select_for_detail(Some(prompt.clone()));
    assert_eq!(app.detail_window.selected().map(|p| p.id.clone()), Some(prompt.id));

    app.select_for_detail(None);
    assert!(app.detail_window.selected().is_none());
}

#[test]
fn session_reset_restores_seed_state() {
    let mut app = ArchitectApp::default();
    app.submit_draft(valid_draft()).unwrap();
    app.set_category(PromptCategory::Poster);
    app.set_search_query("neon");

    app.reset_session();

    assert_eq!(app.catalog.len(), 5);
    assert_eq!(app.selected_category, PromptCategory::All);
    assert_eq!(app.search_query, "");
    assert_eq!(app.visible_prompts().len(), 5);
}
