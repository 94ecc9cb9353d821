//! Entry publisher: validation, field stamping, id freshness.

use pretty_assertions::assert_eq;
use promptarch::app::catalog::PromptCategory;
use promptarch::app::publisher::{
    publish, DraftRejection, PromptDraft, PUBLISHED_AUTHOR, PUBLISHED_DESCRIPTION,
    SHORT_PREVIEW_CHARS,
};

fn valid_draft() -> PromptDraft {
    PromptDraft {
        title: "T".to_string(),
        prompt: "P".to_string(),
        category: PromptCategory::Logo,
        image_data: Some("data:image/png;base64,iVBORw0KGgo=".to_string()),
    }
}

#[test]
fn accepts_a_complete_draft() {
    let entry = publish(&valid_draft()).expect("valid draft should publish");

    assert_eq!(entry.title, "T");
    assert_eq!(entry.prompt, "P");
    assert_eq!(entry.category, PromptCategory::Logo);
    assert_eq!(entry.short_preview, "P...");
    assert_eq!(entry.author, PUBLISHED_AUTHOR);
    assert_eq!(entry.description, PUBLISHED_DESCRIPTION);
    assert_eq!(entry.tips, vec!["Optimized for Gemini".to_string()]);
    assert!(entry.image_url.starts_with("data:image/png;base64,"));
}

#[test]
fn refuses_without_title() {
    let draft = PromptDraft {
        title: String::new(),
        ..valid_draft()
    };
    assert_eq!(publish(&draft), Err(DraftRejection::EmptyTitle));
}

#[test]
fn refuses_without_prompt_text() {
    let draft = PromptDraft {
        prompt: String::new(),
        ..valid_draft()
    };
    assert_eq!(publish(&draft), Err(DraftRejection::EmptyPrompt));
}

#[test]
fn refuses_without_image_payload() {
    let draft = PromptDraft {
        image_data: None,
        ..valid_draft()
    };
    assert_eq!(publish(&draft), Err(DraftRejection::MissingImage));
}

#[test]
fn short_preview_truncates_at_fifty_characters() {
    let draft = PromptDraft {
        prompt: "x".repeat(120),
        ..valid_draft()
    };
    let entry = publish(&draft).unwrap();

    let expected = format!("{}...", "x".repeat(SHORT_PREVIEW_CHARS));
    assert_eq!(entry.short_preview, expected);
}

#[test]
fn short_preview_gets_the_marker_even_when_nothing_was_truncated() {
    let entry = publish(&valid_draft()).unwrap();
    assert!(entry.short_preview.ends_with("..."));
    assert_eq!(entry.short_preview.len(), 1 + 3);
}

#[test]
fn successive_publishes_get_distinct_ids() {
    let draft = valid_draft();
    let first = publish(&draft).unwrap();
    let second = publish(&draft).unwrap();
    assert_ne!(first.id, second.id);
    assert!(!first.id.is_empty());
}

#[test]
fn date_is_stamped_in_human_readable_form() {
    let entry = publish(&valid_draft()).unwrap();

    // "May 25, 2024" style: month abbreviation, unpadded day, comma, year
    let year = chrono::Local::now().format("%Y").to_string();
    assert!(entry.date.ends_with(&year), "date was {:?}", entry.date);
    assert!(entry.date.contains(", "));
    assert!(!entry.date.starts_with('0'));
}

#[test]
fn rejection_messages_name_the_missing_field() {
    assert!(DraftRejection::EmptyTitle.to_string().contains("title"));
    assert!(DraftRejection::EmptyPrompt
        .to_string()
        .to_lowercase()
        .contains("directive"));
    assert!(DraftRejection::MissingImage.to_string().contains("image"));
}
