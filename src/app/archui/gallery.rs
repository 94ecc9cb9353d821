//! Gallery grid: hero header, category chips, prompt cards, empty state.

use super::prompt_image_source;
use crate::app::catalog::{AiPrompt, PromptCategory};
use eframe::egui;
use egui::{Color32, RichText};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// How long a card's copy button shows the confirmation check mark.
const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

const CARD_WIDTH: f32 = 280.0;
const CARD_IMAGE_SIZE: egui::Vec2 = egui::Vec2::new(264.0, 330.0);

const ACCENT: Color32 = Color32::from_rgb(255, 159, 28);

/// What the user did in the gallery this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    None,
    ViewDetails(AiPrompt),
    CopyPrompt(AiPrompt),
}

/// Renders the scrollable gallery content inside the central panel.
///
/// Holds only presentation state (per-card copy feedback timestamps); the
/// visible prompt set and the category selection belong to the controller.
#[derive(Default)]
pub struct GalleryView {
    copied: HashMap<String, Instant>,
}

impl GalleryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render hero, chips, grid, and footer. `scroll_to_gallery` scrolls the
    /// grid header into view this frame (Explore button, hero button).
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        visible: &[&AiPrompt],
        selected_category: &mut PromptCategory,
        mut scroll_to_gallery: bool,
    ) -> GalleryAction {
        let mut action = GalleryAction::None;

        self.copied
            .retain(|_, copied_at| copied_at.elapsed() < COPY_FEEDBACK);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(48.0);
                    ui.label(
                        RichText::new("GLOBAL GEMINI HUB")
                            .small()
                            .color(ui.visuals().weak_text_color()),
                    );
                    ui.add_space(12.0);
                    ui.label(RichText::new("The Prompt").heading().size(56.0).strong());
                    ui.label(
                        RichText::new("Architect.")
                            .heading()
                            .size(56.0)
                            .strong()
                            .italics()
                            .color(ACCENT),
                    );
                    ui.add_space(16.0);
                    ui.label(
                        "Engineering the future of AI artistry through curated high-fidelity directives.",
                    );
                    ui.add_space(20.0);
                    if ui
                        .button(RichText::new("Explore Core ➡").strong())
                        .clicked()
                    {
                        scroll_to_gallery = true;
                    }
                    ui.add_space(48.0);
                });

                ui.separator();
                ui.add_space(12.0);

                let header = ui.heading("Asset Gallery");
                if scroll_to_gallery {
                    header.scroll_to_me(Some(egui::Align::Min));
                }
                ui.label(
                    RichText::new("Optimized Core Intelligence")
                        .small()
                        .color(ui.visuals().weak_text_color()),
                );
                ui.add_space(8.0);

                ui.horizontal_wrapped(|ui| {
                    for category in PromptCategory::ALL_VALUES {
                        ui.selectable_value(selected_category, category, category.label());
                    }
                });
                ui.add_space(16.0);

                if visible.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(80.0);
                        ui.heading("Empty Registry");
                        ui.label(
                            RichText::new("No results found for current query")
                                .color(ui.visuals().weak_text_color()),
                        );
                        ui.add_space(80.0);
                    });
                } else if let Some(card_action) = self.show_grid(ui, visible) {
                    action = card_action;
                }

                ui.add_space(32.0);
                ui.separator();
                ui.vertical_centered(|ui| {
                    ui.add_space(12.0);
                    ui.label(
                        RichText::new("© 2025 PROMPT ARCHITECT • Engineered for Gemini")
                            .small()
                            .color(ui.visuals().weak_text_color()),
                    );
                    ui.add_space(12.0);
                });
            });

        action
    }

    fn show_grid(&mut self, ui: &mut egui::Ui, visible: &[&AiPrompt]) -> Option<GalleryAction> {
        let columns = ((ui.available_width() / (CARD_WIDTH + 16.0)).floor() as usize).max(1);
        let mut action = None;

        for row in visible.chunks(columns) {
            ui.horizontal_top(|ui| {
                for prompt in row {
                    if let Some(card_action) = self.show_card(ui, prompt) {
                        action = Some(card_action);
                    }
                }
            });
            ui.add_space(16.0);
        }

        action
    }

    fn show_card(&mut self, ui: &mut egui::Ui, prompt: &AiPrompt) -> Option<GalleryAction> {
        let mut action = None;

        egui::Frame::group(ui.style())
            .corner_radius(16.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                ui.vertical(|ui| {
                    let source = prompt_image_source(ui.ctx(), prompt);
                    let image = egui::Image::new(source)
                        .fit_to_exact_size(CARD_IMAGE_SIZE)
                        .corner_radius(12.0);
                    if ui
                        .add(egui::ImageButton::new(image).frame(false))
                        .on_hover_text(&prompt.short_preview)
                        .clicked()
                    {
                        action = Some(GalleryAction::ViewDetails((*prompt).clone()));
                    }

                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(prompt.category.label())
                                .small()
                                .color(ACCENT),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let recently_copied = self
                                    .copied
                                    .get(&prompt.id)
                                    .is_some_and(|at| at.elapsed() < COPY_FEEDBACK);
                                let copy_label = if recently_copied { "✔" } else { "📋" };
                                if ui
                                    .button(copy_label)
                                    .on_hover_text("Copy directive")
                                    .clicked()
                                {
                                    self.copied.insert(prompt.id.clone(), Instant::now());
                                    action = Some(GalleryAction::CopyPrompt((*prompt).clone()));
                                }
                            },
                        );
                    });

                    if ui
                        .link(RichText::new(&prompt.title).strong().size(16.0))
                        .clicked()
                    {
                        action = Some(GalleryAction::ViewDetails((*prompt).clone()));
                    }
                    ui.label(
                        RichText::new(format!("@{}", prompt.author))
                            .small()
                            .color(ui.visuals().weak_text_color()),
                    );
                });
            });

        action
    }
}
