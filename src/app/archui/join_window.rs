//! Informational community-hub dialog.

use super::window_focus::{FocusableWindow, SimpleShowParams, WindowFocusManager};
use eframe::egui;
use egui::RichText;

#[derive(Default)]
pub struct JoinWindow {
    pub open: bool,
}

impl JoinWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &egui::Context, bring_to_front: bool) {
        if !self.open {
            return;
        }

        let mut open = self.open;
        let mut dismissed = false;

        let window = egui::Window::new("Community Hub")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(380.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO);
        let window = WindowFocusManager::apply_focus_order(window, bring_to_front);

        window.show(ctx, |ui| {
            ui.add_space(4.0);
            ui.label("Prompt Architect is a free, open-access Gemini prompt gallery.");
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "Community features including user profiles and favorites are \
                     currently in development.",
                )
                .small()
                .color(ui.visuals().weak_text_color()),
            );
            ui.add_space(12.0);
            if ui
                .add_sized(
                    [ui.available_width(), 32.0],
                    egui::Button::new(RichText::new("Got it").strong()),
                )
                .clicked()
            {
                dismissed = true;
            }
        });

        self.open = open && !dismissed;
    }
}

impl FocusableWindow for JoinWindow {
    type ShowParams = SimpleShowParams;

    fn window_id(&self) -> &'static str {
        "join_window"
    }

    fn window_title(&self) -> String {
        "Community Hub".to_string()
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
        JoinWindow::show(self, ctx, bring_to_front);
    }
}
