//! The main application: gallery controller and egui update loop.

use super::gallery::{GalleryAction, GalleryView};
use super::join_window::JoinWindow;
use super::menu::{self, MenuAction};
use super::prompt_detail_window::{DetailAction, PromptDetailWindow};
use super::publish_window::{PublishAction, PublishWindow};
use super::window_focus::{FocusableWindow, WindowFocusManager};
use crate::app::catalog::{AiPrompt, PromptCatalog, PromptCategory};
use crate::app::filter::filter_prompts;
use crate::app::notifications::ToastEmitter;
use crate::app::publisher::{self, DraftRejection, PromptDraft};
use crate::app::ADMIN_BUILD;
use eframe::egui;
use tracing::{info, warn};

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
pub enum ThemeChoice {
    Latte,
    Frappe,
    Macchiato,
    #[default]
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

/// Gallery controller and application root.
///
/// Exclusively owns the prompt catalog. All window components report user
/// actions back through their action enums; the mutations happen here, in
/// event order, on the UI thread. The visible prompt set is derived - see
/// [`ArchitectApp::visible_prompts`] - and never cached between frames.
///
/// Only the theme survives a restart (eframe storage); everything else is
/// session state that reseeds from the fixed catalog.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ArchitectApp {
    pub theme: ThemeChoice,

    #[serde(skip)]
    pub catalog: PromptCatalog,
    #[serde(skip)]
    pub selected_category: PromptCategory,
    #[serde(skip)]
    pub search_query: String,
    #[serde(skip)]
    pub gallery: GalleryView,
    #[serde(skip)]
    pub detail_window: PromptDetailWindow,
    #[serde(skip)]
    pub publish_window: PublishWindow,
    #[serde(skip)]
    pub join_window: JoinWindow,
    #[serde(skip)]
    pub toast: ToastEmitter,
    #[serde(skip)]
    window_focus_manager: WindowFocusManager,
    #[serde(skip)]
    pending_gallery_scroll: bool,
}

impl Default for ArchitectApp {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            catalog: PromptCatalog::seeded(),
            selected_category: PromptCategory::All,
            search_query: String::new(),
            gallery: GalleryView::new(),
            detail_window: PromptDetailWindow::new(),
            publish_window: PublishWindow::new(),
            join_window: JoinWindow::new(),
            toast: ToastEmitter::new(),
            window_focus_manager: WindowFocusManager::new(),
            pending_gallery_scroll: false,
        }
    }
}

impl ArchitectApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app: Self = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        app.apply_theme(&cc.egui_ctx);

        app
    }

    pub fn apply_theme(&self, ctx: &egui::Context) {
        let theme = match self.theme {
            ThemeChoice::Latte => catppuccin_egui::LATTE,
            ThemeChoice::Frappe => catppuccin_egui::FRAPPE,
            ThemeChoice::Macchiato => catppuccin_egui::MACCHIATO,
            ThemeChoice::Mocha => catppuccin_egui::MOCHA,
        };
        catppuccin_egui::set_theme(ctx, theme);
    }

    /// The filtered view of the catalog for the current category selection
    /// and search query. Recomputed on every call - filtering is derived
    /// state, never stored.
    pub fn visible_prompts(&self) -> Vec<&AiPrompt> {
        filter_prompts(
            self.catalog.entries(),
            self.selected_category,
            &self.search_query,
        )
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_category(&mut self, category: PromptCategory) {
        self.selected_category = category;
    }

    /// Open the detail window on `prompt`, or close it with `None`.
    pub fn select_for_detail(&mut self, prompt: Option<AiPrompt>) {
        match prompt {
            Some(prompt) => {
                self.detail_window.open(prompt);
                self.window_focus_manager
                    .request_focus(self.detail_window.window_id().to_string());
            }
            None => self.detail_window.close(),
        }
    }

    /// Validate `draft` and, on acceptance, prepend the new entry to the
    /// catalog, close the publish window, and confirm with a toast. A
    /// rejection leaves every piece of state untouched and surfaces the
    /// reason through the toast.
    pub fn submit_draft(&mut self, draft: PromptDraft) -> Result<(), DraftRejection> {
        match publisher::publish(&draft) {
            Ok(entry) => {
                info!(id = %entry.id, title = %entry.title, category = %entry.category, "prompt published");
                self.catalog.prepend(entry);
                self.publish_window.close();
                self.toast.emit("Prompt published successfully!");
                Ok(())
            }
            Err(rejection) => {
                warn!(%rejection, "draft rejected");
                self.toast.emit(rejection.to_string());
                Err(rejection)
            }
        }
    }

    /// Hand the directive text to the system clipboard and confirm.
    pub fn copy_prompt_text(&mut self, ctx: &egui::Context, prompt: &AiPrompt) {
        ctx.copy_text(prompt.prompt.clone());
        self.toast.emit("Directive Copied");
    }

    /// Reinitialize the session: seed catalog, `All` category, empty query.
    pub fn reset_session(&mut self) {
        info!("session reset to seed catalog");
        self.catalog.reset();
        self.selected_category = PromptCategory::All;
        self.search_query.clear();
        self.detail_window.close();
    }

    fn handle_menu_action(&mut self, ctx: &egui::Context, action: MenuAction) {
        match action {
            MenuAction::None => {}
            MenuAction::ResetSession => self.reset_session(),
            MenuAction::Explore => self.pending_gallery_scroll = true,
            MenuAction::Join => {
                self.join_window.open = true;
                self.window_focus_manager
                    .request_focus(self.join_window.window_id().to_string());
            }
            MenuAction::Publish => {
                if ADMIN_BUILD {
                    self.publish_window.open_window();
                    self.window_focus_manager
                        .request_focus(self.publish_window.window_id().to_string());
                }
            }
            MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn render_navigation_bar(&mut self, ctx: &egui::Context) {
        let action = egui::TopBottomPanel::top("navigation_bar")
            .show(ctx, |ui| {
                menu::build_menu(ui, ctx, &mut self.theme, &mut self.search_query)
            })
            .inner;
        self.handle_menu_action(ctx, action);
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        let scroll_to_gallery = std::mem::take(&mut self.pending_gallery_scroll);
        let mut action = GalleryAction::None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let visible = filter_prompts(
                self.catalog.entries(),
                self.selected_category,
                &self.search_query,
            );
            action = self
                .gallery
                .show(ui, &visible, &mut self.selected_category, scroll_to_gallery);
        });

        match action {
            GalleryAction::None => {}
            GalleryAction::ViewDetails(prompt) => self.select_for_detail(Some(prompt)),
            GalleryAction::CopyPrompt(prompt) => self.copy_prompt_text(ctx, &prompt),
        }
    }

    fn handle_detail_window(&mut self, ctx: &egui::Context) {
        if !self.detail_window.is_open() {
            return;
        }

        let window_id = self.detail_window.window_id();
        let bring_to_front = self.window_focus_manager.should_bring_to_front(window_id);
        if bring_to_front {
            self.window_focus_manager.clear_bring_to_front(window_id);
        }

        if let DetailAction::CopyPrompt(prompt) = self.detail_window.show(ctx, bring_to_front) {
            self.copy_prompt_text(ctx, &prompt);
        }
    }

    fn handle_join_window(&mut self, ctx: &egui::Context) {
        if !self.join_window.is_open() {
            return;
        }

        let window_id = self.join_window.window_id();
        let bring_to_front = self.window_focus_manager.should_bring_to_front(window_id);
        if bring_to_front {
            self.window_focus_manager.clear_bring_to_front(window_id);
        }

        self.join_window.show(ctx, bring_to_front);
    }

    /// Build information in the bottom-right corner of debug builds.
    fn render_debug_panel(&self, ctx: &egui::Context) {
        if !cfg!(debug_assertions) {
            return;
        }

        egui::TopBottomPanel::bottom("debug_panel")
            .show_separator_line(false)
            .resizable(false)
            .min_height(0.0)
            .show(ctx, |ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "Debug Build - {}@{}",
                            env!("GIT_BRANCH"),
                            env!("GIT_COMMIT")
                        ))
                        .small()
                        .color(egui::Color32::from_rgb(255, 165, 0)),
                    );
                });
            });
    }

    fn handle_publish_window(&mut self, ctx: &egui::Context) {
        if !ADMIN_BUILD || !self.publish_window.is_open() {
            return;
        }

        let window_id = self.publish_window.window_id();
        let bring_to_front = self.window_focus_manager.should_bring_to_front(window_id);
        if bring_to_front {
            self.window_focus_manager.clear_bring_to_front(window_id);
        }

        if let PublishAction::Submit(draft) = self.publish_window.show(ctx, bring_to_front) {
            let _ = self.submit_draft(draft);
        }
    }
}

impl eframe::App for ArchitectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_navigation_bar(ctx);
        self.render_debug_panel(ctx);
        self.render_central_panel(ctx);

        self.handle_detail_window(ctx);
        self.handle_join_window(ctx);
        self.handle_publish_window(ctx);

        self.toast.show(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

// Fuzzy search utilities (used by the image picker's filename filter)

pub fn fuzzy_match(pattern: &str, text: &str) -> bool {
    fuzzy_match_score(pattern, text).is_some()
}

pub fn fuzzy_match_score(pattern: &str, text: &str) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }

    let pattern = pattern.to_lowercase();
    let text = text.to_lowercase();

    let mut score = 0;
    let mut pattern_idx = 0;
    let pattern_chars: Vec<char> = pattern.chars().collect();
    let mut consecutive_matches = 0;

    for c in text.chars() {
        if pattern_idx < pattern_chars.len() && c == pattern_chars[pattern_idx] {
            pattern_idx += 1;
            consecutive_matches += 1;
            // Bonus for consecutive matches
            score += consecutive_matches;
        } else {
            consecutive_matches = 0;
        }
    }

    if pattern_idx == pattern_chars.len() {
        // Bonus for shorter text (more precise match)
        let length_ratio = pattern.len() as f32 / text.len() as f32;
        score = (score as f32 * (1.0 + length_ratio)) as usize;
        Some(score)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuzzy_match_is_subsequence_based() {
        assert!(fuzzy_match("snkr", "sneaker.png"));
        assert!(fuzzy_match("", "anything"));
        assert!(!fuzzy_match("xyz", "sneaker.png"));
    }

    #[test]
    fn fuzzy_score_prefers_consecutive_runs() {
        let consecutive = fuzzy_match_score("logo", "logo.png").unwrap();
        let scattered = fuzzy_match_score("logo", "l_o_g_o_file.png").unwrap();
        assert!(consecutive > scattered);
    }
}
