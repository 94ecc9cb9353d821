//! Detail view of a single prompt.

use super::prompt_image_source;
use super::window_focus::{FocusableWindow, SimpleShowParams, WindowFocusManager};
use crate::app::catalog::AiPrompt;
use eframe::egui;
use egui::{Color32, RichText};
use std::time::{Duration, Instant};

const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

const ACCENT: Color32 = Color32::from_rgb(255, 159, 28);

#[derive(Debug, Clone, PartialEq)]
pub enum DetailAction {
    None,
    CopyPrompt(AiPrompt),
}

/// Modal-style window showing one prompt in full: showcase image, quoted
/// directive text, tips, and the primary copy action.
#[derive(Default)]
pub struct PromptDetailWindow {
    prompt: Option<AiPrompt>,
    copied_at: Option<Instant>,
}

impl PromptDetailWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the window on `prompt`, replacing any previous selection.
    pub fn open(&mut self, prompt: AiPrompt) {
        self.prompt = Some(prompt);
        self.copied_at = None;
    }

    pub fn close(&mut self) {
        self.prompt = None;
    }

    /// The entity currently shown, if the window is open.
    pub fn selected(&self) -> Option<&AiPrompt> {
        self.prompt.as_ref()
    }

    pub fn show(&mut self, ctx: &egui::Context, bring_to_front: bool) -> DetailAction {
        let Some(prompt) = self.prompt.clone() else {
            return DetailAction::None;
        };

        let mut open = true;
        let mut action = DetailAction::None;

        let window = egui::Window::new(RichText::new(&prompt.title).strong())
            .id(egui::Id::new("prompt_detail_window"))
            .open(&mut open)
            .collapsible(false)
            .resizable(true)
            .default_width(560.0);
        let window = WindowFocusManager::apply_focus_order(window, bring_to_front);

        window.show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(prompt.category.label()).small().color(ACCENT));
                ui.label(
                    RichText::new(format!("@{} • {}", prompt.author, prompt.date))
                        .small()
                        .color(ui.visuals().weak_text_color()),
                );
            });
            ui.add_space(8.0);

            ui.vertical_centered(|ui| {
                ui.add(
                    egui::Image::new(prompt_image_source(ui.ctx(), &prompt))
                        .max_size(egui::vec2(520.0, 340.0))
                        .corner_radius(12.0),
                );
            });
            ui.add_space(8.0);

            ui.label(
                RichText::new("GEMINI DIRECTIVE")
                    .small()
                    .color(ui.visuals().weak_text_color()),
            );
            egui::Frame::group(ui.style())
                .corner_radius(12.0)
                .show(ui, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("directive_text")
                        .max_height(160.0)
                        .show(ui, |ui| {
                            ui.label(RichText::new(format!("\"{}\"", prompt.prompt)).italics());
                        });
                });

            if !prompt.tips.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new("Pro Tips").strong());
                for tip in &prompt.tips {
                    ui.label(format!("• {tip}"));
                }
            }

            ui.add_space(12.0);
            let recently_copied = self
                .copied_at
                .is_some_and(|at| at.elapsed() < COPY_FEEDBACK);
            let label = if recently_copied {
                RichText::new("✔ Directive Copied").strong()
            } else {
                RichText::new("📋 Copy Prompt").strong().color(ACCENT)
            };
            if ui
                .add_sized([ui.available_width(), 36.0], egui::Button::new(label))
                .clicked()
            {
                self.copied_at = Some(Instant::now());
                action = DetailAction::CopyPrompt(prompt.clone());
            }
        });

        if !open {
            self.prompt = None;
        }

        action
    }
}

impl FocusableWindow for PromptDetailWindow {
    type ShowParams = SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "prompt_detail_window"
    }

    fn window_title(&self) -> String {
        self.prompt
            .as_ref()
            .map(|p| p.title.clone())
            .unwrap_or_else(|| "Prompt Detail".to_string())
    }

    fn is_open(&self) -> bool {
        self.prompt.is_some()
    }

    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        _params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        PromptDetailWindow::show(self, ctx, bring_to_front);
    }
}
