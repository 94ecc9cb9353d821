//! Construction of new catalog entries from user-entered drafts.
//!
//! The publisher validates a [`PromptDraft`] and either produces a fully
//! formed [`AiPrompt`] or a typed [`DraftRejection`]. It never touches the
//! catalog itself; the gallery controller decides whether and where to
//! insert the result.

use super::catalog::{AiPrompt, PromptCategory};
use thiserror::Error;

/// Author label stamped on every published entry.
pub const PUBLISHED_AUTHOR: &str = "Admin";

/// Fixed description stamped on every published entry.
pub const PUBLISHED_DESCRIPTION: &str = "Global Repository Asset";

/// Number of prompt characters carried into the short preview.
pub const SHORT_PREVIEW_CHARS: usize = 50;

/// Unsaved, in-progress input for a new entry. Owned by the publish window,
/// not by the gallery controller; closing the window discards it.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptDraft {
    pub title: String,
    pub prompt: String,
    pub category: PromptCategory,
    /// Already-decoded image payload (a `data:` URI), produced by the image
    /// picker's loader. `None` until an image has been selected and read.
    pub image_data: Option<String>,
}

impl Default for PromptDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            prompt: String::new(),
            category: PromptCategory::Portrait,
            image_data: None,
        }
    }
}

/// Why a draft was refused. Surfaced to the user through the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftRejection {
    #[error("A title is required before publishing")]
    EmptyTitle,
    #[error("Directive text is required before publishing")]
    EmptyPrompt,
    #[error("An image is required before publishing")]
    MissingImage,
}

/// Validate `draft` and build the catalog entry it describes.
///
/// On acceptance the entry gets a fresh UUID v4 id, a short preview of the
/// first [`SHORT_PREVIEW_CHARS`] characters of the prompt followed by an
/// ellipsis marker (appended unconditionally, truncated or not), today's
/// date in `"May 25, 2024"` style, and the fixed author/description labels.
/// Title, prompt, category, and image payload are carried over verbatim.
pub fn publish(draft: &PromptDraft) -> Result<AiPrompt, DraftRejection> {
    if draft.title.is_empty() {
        return Err(DraftRejection::EmptyTitle);
    }
    if draft.prompt.is_empty() {
        return Err(DraftRejection::EmptyPrompt);
    }
    let Some(image_url) = draft.image_data.clone() else {
        return Err(DraftRejection::MissingImage);
    };

    Ok(AiPrompt {
        id: uuid::Uuid::new_v4().to_string(),
        title: draft.title.clone(),
        description: PUBLISHED_DESCRIPTION.to_string(),
        prompt: draft.prompt.clone(),
        short_preview: short_preview(&draft.prompt),
        image_url,
        category: draft.category,
        author: PUBLISHED_AUTHOR.to_string(),
        date: chrono::Local::now().format("%b %-d, %Y").to_string(),
        tips: vec!["Optimized for Gemini".to_string()],
    })
}

/// First [`SHORT_PREVIEW_CHARS`] characters of `prompt` plus an ellipsis
/// marker. Character-based so multi-byte text never splits mid-scalar.
fn short_preview(prompt: &str) -> String {
    let mut preview: String = prompt.chars().take(SHORT_PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}
