//! Top navigation bar: brand, search field, and gallery actions.

use super::app::ThemeChoice;
use crate::app::ADMIN_BUILD;
use eframe::egui;
use egui::RichText;

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    /// Brand click: reinitialize the session from the seed catalog.
    ResetSession,
    /// Scroll the gallery grid into view.
    Explore,
    Join,
    /// Open the publish window. Only emitted in admin builds.
    Publish,
    Quit,
}

/// Render the navigation bar contents and report the action the user took.
///
/// The search field edits `search_query` in place; filtering picks the new
/// value up on this same frame since the visible set is derived, not stored.
pub fn build_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &mut ThemeChoice,
    search_query: &mut String,
) -> MenuAction {
    let mut menu_action = MenuAction::None;

    ui.horizontal(|ui| {
        let brand = ui.add(
            egui::Button::new(
                RichText::new("⚡ PROMPT ARCHITECT")
                    .strong()
                    .size(16.0),
            )
            .frame(false),
        );
        if brand.on_hover_text("Back to start").clicked() {
            menu_action = MenuAction::ResetSession;
        }

        ui.menu_button("Hub", |ui| {
            if ui.button("Explore").clicked() {
                menu_action = MenuAction::Explore;
            }
            if ui.button("Join").clicked() {
                menu_action = MenuAction::Join;
            }
            if ADMIN_BUILD && ui.button("Publish Asset").clicked() {
                menu_action = MenuAction::Publish;
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                menu_action = MenuAction::Quit;
            }
        });

        ui.separator();

        ui.add(
            egui::TextEdit::singleline(search_query)
                .hint_text("Search prompt library...")
                .desired_width(320.0),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
                if ui.button("Latte").clicked() {
                    catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE);
                    *theme = ThemeChoice::Latte;
                }
                if ui.button("Frappe").clicked() {
                    catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE);
                    *theme = ThemeChoice::Frappe;
                }
                if ui.button("Macchiato").clicked() {
                    catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO);
                    *theme = ThemeChoice::Macchiato;
                }
                if ui.button("Mocha").clicked() {
                    catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA);
                    *theme = ThemeChoice::Mocha;
                }
            });

            if ui.button(RichText::new("Join").strong()).clicked() {
                menu_action = MenuAction::Join;
            }

            if ADMIN_BUILD {
                let publish = ui.button(RichText::new("＋").size(16.0));
                if publish.on_hover_text("Publish Asset").clicked() {
                    menu_action = MenuAction::Publish;
                }
            }

            if ui.button("Explore").clicked() {
                menu_action = MenuAction::Explore;
            }
        });
    });

    menu_action
}
