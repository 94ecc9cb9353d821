//! Desktop user interface for Prompt Architect.
//!
//! The interface is built from focusable window components coordinated by
//! [`app::ArchitectApp`]:
//!
//! - [`menu`] - navigation bar with brand, search field, and actions
//! - [`gallery`] - hero header, category chips, and the prompt card grid
//! - [`prompt_detail_window`] - full view of one prompt with copy action
//! - [`publish_window`] - admin-build form for publishing a new entry
//! - [`join_window`] - informational community-hub dialog
//! - [`image_picker`] - keyboard-driven image file browser feeding the
//!   publish form
//!
//! All windows implement [`window_focus::FocusableWindow`] and are raised
//! through the [`window_focus::WindowFocusManager`].

pub mod app;
pub mod gallery;
pub mod image_picker;
pub mod join_window;
pub mod menu;
pub mod prompt_detail_window;
pub mod publish_window;
pub mod window_focus;

pub use app::ArchitectApp;
pub use gallery::{GalleryAction, GalleryView};
pub use image_picker::{ImageFilePicker, ImagePickerStatus};
pub use join_window::JoinWindow;
pub use menu::MenuAction;
pub use prompt_detail_window::{DetailAction, PromptDetailWindow};
pub use publish_window::{PublishAction, PublishWindow};
pub use window_focus::{FocusableWindow, SimpleShowParams, WindowFocusManager};

use crate::app::catalog::AiPrompt;
use base64::Engine;
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::warn;

/// Resolve the image source for a prompt's preview.
///
/// Remote URLs pass straight to the egui image loaders. `data:` URI payloads
/// are decoded once and registered as in-memory bytes with the context,
/// keyed by the prompt id; subsequent frames reuse the registered bytes.
pub(crate) fn prompt_image_source(ctx: &egui::Context, prompt: &AiPrompt) -> egui::ImageSource<'static> {
    let Some(data_uri) = prompt.image_url.strip_prefix("data:") else {
        return egui::ImageSource::Uri(Cow::Owned(prompt.image_url.clone()));
    };

    let uri = format!("bytes://prompt-{}", prompt.id);
    let first_sighting = ctx.data_mut(|d| {
        let registered: &mut HashSet<String> =
            d.get_temp_mut_or_default(egui::Id::new("prompt_image_uris"));
        registered.insert(uri.clone())
    });

    if first_sighting {
        match data_uri
            .split_once(',')
            .ok_or("missing payload separator")
            .and_then(|(_, payload)| {
                base64::engine::general_purpose::STANDARD
                    .decode(payload)
                    .map_err(|_| "invalid base64 payload")
            }) {
            Ok(bytes) => ctx.include_bytes(uri.clone(), bytes),
            Err(reason) => {
                warn!(id = %prompt.id, reason, "unusable image data payload");
                return egui::ImageSource::Uri(Cow::Owned(prompt.image_url.clone()));
            }
        }
    }

    egui::ImageSource::Uri(Cow::Owned(uri))
}
