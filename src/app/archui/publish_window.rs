//! Publish form for new prompt entries (admin builds).
//!
//! Owns the in-progress draft; closing the window discards it. The image
//! payload arrives asynchronously from the picker's background loader and is
//! polled here each frame.

use super::image_picker::{
    load_image_as_data_uri, ImageFilePicker, ImageLoadHandle, ImagePickerStatus,
};
use super::window_focus::{FocusableWindow, SimpleShowParams, WindowFocusManager};
use crate::app::catalog::PromptCategory;
use crate::app::publisher::PromptDraft;
use base64::Engine;
use eframe::egui;
use egui::RichText;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum PublishAction {
    None,
    /// The user pressed the publish button; the controller validates and
    /// decides what happens.
    Submit(PromptDraft),
}

pub struct PublishWindow {
    pub open: bool,
    draft: PromptDraft,
    picker: Option<ImageFilePicker>,
    pending_load: Option<ImageLoadHandle>,
    image_error: Option<String>,
    /// `bytes://` URI of the registered preview for the current image.
    preview_uri: Option<String>,
    preview_revision: u32,
}

impl Default for PublishWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl PublishWindow {
    pub fn new() -> Self {
        Self {
            open: false,
            draft: PromptDraft::default(),
            picker: None,
            pending_load: None,
            image_error: None,
            preview_uri: None,
            preview_revision: 0,
        }
    }

    /// Open the window with a fresh draft.
    pub fn open_window(&mut self) {
        self.open = true;
    }

    /// Close the window, discarding the in-progress draft.
    pub fn close(&mut self) {
        self.open = false;
        self.draft = PromptDraft::default();
        self.picker = None;
        self.pending_load = None;
        self.image_error = None;
        self.preview_uri = None;
    }

    pub fn draft(&self) -> &PromptDraft {
        &self.draft
    }

    pub fn show(&mut self, ctx: &egui::Context, bring_to_front: bool) -> PublishAction {
        if !self.open {
            return PublishAction::None;
        }

        self.poll_image_load(ctx);
        self.show_picker(ctx);

        let mut open = true;
        let mut action = PublishAction::None;

        let window = egui::Window::new("Publish Asset")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(520.0);
        let window = WindowFocusManager::apply_focus_order(window, bring_to_front);

        window.show(ctx, |ui| {
            ui.label(
                RichText::new("Secure Owner Environment")
                    .small()
                    .color(ui.visuals().weak_text_color()),
            );
            ui.add_space(8.0);

            match (&self.preview_uri, self.draft.image_data.is_some()) {
                (Some(uri), true) => {
                    ui.vertical_centered(|ui| {
                        ui.add(
                            egui::Image::new(egui::ImageSource::Uri(uri.clone().into()))
                                .max_size(egui::vec2(480.0, 260.0))
                                .corner_radius(12.0),
                        );
                    });
                    if ui.button("Replace image").clicked() {
                        self.picker = Some(ImageFilePicker::new());
                    }
                }
                _ => {
                    let browse = ui.add_sized(
                        [ui.available_width(), 120.0],
                        egui::Button::new("🖼 Click to browse for an image\nRecommended: high resolution PNG/JPG"),
                    );
                    if browse.clicked() {
                        self.picker = Some(ImageFilePicker::new());
                    }
                }
            }

            if self.pending_load.is_some() {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().size(16.0));
                    ui.label("Loading image...");
                });
                // Keep polling until the loader thread reports back
                ctx.request_repaint();
            }
            if let Some(error) = &self.image_error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Asset Title").strong());
            ui.add(
                egui::TextEdit::singleline(&mut self.draft.title)
                    .hint_text("Ex: Futuristic Tokyo Streetscape...")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(8.0);
            ui.label(RichText::new("Category").strong());
            egui::ComboBox::from_id_salt("publish_category")
                .selected_text(self.draft.category.label())
                .show_ui(ui, |ui| {
                    for category in PromptCategory::SELECTABLE {
                        ui.selectable_value(
                            &mut self.draft.category,
                            category,
                            category.label(),
                        );
                    }
                });

            ui.add_space(8.0);
            ui.label(RichText::new("Gemini Directives").strong());
            ui.add(
                egui::TextEdit::multiline(&mut self.draft.prompt)
                    .hint_text("Enter full engineering prompt instructions here...")
                    .desired_rows(6)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(12.0);
            if ui
                .add_sized(
                    [ui.available_width(), 36.0],
                    egui::Button::new(RichText::new("✔ Publish to Core Registry").strong()),
                )
                .clicked()
            {
                action = PublishAction::Submit(self.draft.clone());
            }
        });

        if !open {
            self.close();
        }

        action
    }

    /// Consume a finished image-load job, if any.
    fn poll_image_load(&mut self, ctx: &egui::Context) {
        let Some(handle) = &self.pending_load else {
            return;
        };
        let Some(result) = handle.try_recv() else {
            return;
        };
        self.pending_load = None;

        match result {
            Ok(data_uri) => {
                self.draft.image_data = Some(data_uri);
                self.image_error = None;
                self.register_preview(ctx);
            }
            Err(e) => {
                warn!("image load failed: {:#}", e);
                self.image_error = Some(format!("{:#}", e));
            }
        }
    }

    fn show_picker(&mut self, ctx: &egui::Context) {
        let Some(picker) = &mut self.picker else {
            return;
        };
        picker.show(ctx);

        match &picker.status {
            ImagePickerStatus::Open => {}
            ImagePickerStatus::Closed => {
                self.picker = None;
            }
            ImagePickerStatus::Selected(path) => {
                let path = path.clone();
                self.picker = None;
                self.pending_load = Some(load_image_as_data_uri(path));
            }
        }
    }

    /// Register the draft's image bytes with the context so the form can
    /// preview them. A fresh URI per image keeps the texture cache honest
    /// when the image is replaced.
    fn register_preview(&mut self, ctx: &egui::Context) {
        let Some(data_uri) = &self.draft.image_data else {
            return;
        };
        let Some((_, payload)) = data_uri.split_once(',') else {
            return;
        };
        match base64::engine::general_purpose::STANDARD.decode(payload) {
            Ok(bytes) => {
                self.preview_revision += 1;
                let uri = format!("bytes://publish-preview-{}", self.preview_revision);
                ctx.include_bytes(uri.clone(), bytes);
                self.preview_uri = Some(uri);
            }
            Err(e) => {
                warn!("could not decode image payload for preview: {}", e);
            }
        }
    }
}

impl FocusableWindow for PublishWindow {
    type ShowParams = SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "publish_window"
    }

    fn window_title(&self) -> String {
        "Publish Asset".to_string()
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        _params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        PublishWindow::show(self, ctx, bring_to_front);
    }
}
