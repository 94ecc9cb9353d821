//! Image file picker for the publish form.
//!
//! A keyboard-driven directory browser restricted to raster image files.
//! Selecting a file hands back a path; the caller then starts a background
//! [`load_image_as_data_uri`] job which reads the bytes, verifies they look
//! like an image, and encodes them into a self-contained `data:` URI. The UI
//! thread never blocks on file IO.

use super::app::fuzzy_match_score;
use anyhow::Context as _;
use base64::Engine;
use eframe::egui;
use egui::{Context, Key, RichText};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// File extensions offered by the picker.
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Status of the image file picker
#[derive(Debug, PartialEq)]
pub enum ImagePickerStatus {
    /// The picker is open and waiting for input
    Open,
    /// The picker was closed without a selection
    Closed,
    /// An image file was selected
    Selected(PathBuf),
}

/// A file picker that uses fuzzy search to navigate directories, listing
/// only image files.
pub struct ImageFilePicker {
    /// Current status of the picker
    pub status: ImagePickerStatus,

    /// Current directory being browsed
    current_dir: PathBuf,

    /// Current search query
    query: String,

    /// Currently filtered entries in the current directory
    filtered_entries: Vec<(String, bool)>, // (name, is_dir)

    /// Currently selected entry index
    selected_index: Option<usize>,

    /// Error message, if any
    error_message: Option<String>,
}

impl Default for ImageFilePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFilePicker {
    /// Create a new picker starting in the user's home directory.
    pub fn new() -> Self {
        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        let mut picker = Self {
            status: ImagePickerStatus::Open,
            current_dir: home_dir,
            query: String::new(),
            filtered_entries: Vec::new(),
            selected_index: None,
            error_message: None,
        };

        picker.update_entries();

        picker
    }

    /// Update the filtered entries based on the current query
    fn update_entries(&mut self) {
        self.filtered_entries.clear();
        self.selected_index = None;

        match std::fs::read_dir(&self.current_dir) {
            Ok(entries) => {
                let mut dirs = Vec::new();
                let mut files = Vec::new();

                for entry in entries.flatten() {
                    let path = entry.path();
                    let name = entry.file_name().to_string_lossy().to_string();
                    let is_dir = path.is_dir();

                    // Skip hidden files and directories
                    if name.starts_with('.') {
                        continue;
                    }

                    if !is_dir && !has_image_extension(&path) {
                        continue;
                    }

                    if self.query.is_empty() || fuzzy_match_score(&self.query, &name).is_some() {
                        if is_dir {
                            dirs.push((name, true));
                        } else {
                            files.push((name, false));
                        }
                    }
                }

                // Directories first, each group sorted by name
                dirs.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));
                files.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));

                self.filtered_entries.extend(dirs);
                self.filtered_entries.extend(files);

                if !self.filtered_entries.is_empty() {
                    self.selected_index = Some(0);
                }
            }
            Err(e) => {
                self.error_message = Some(format!("Error reading directory: {}", e));
            }
        }
    }

    /// Accept the current selection: navigate into a directory, or finish
    /// with the chosen image file.
    fn accept_selection(&mut self) {
        let Some(idx) = self.selected_index else {
            return;
        };
        let Some((name, is_dir)) = self.filtered_entries.get(idx).cloned() else {
            return;
        };

        let target = self.current_dir.join(&name);
        if is_dir {
            if target.is_dir() {
                self.current_dir = target;
                self.query.clear();
                self.update_entries();
            } else {
                self.error_message = Some(format!("Cannot access directory: {}", name));
            }
        } else {
            self.status = ImagePickerStatus::Selected(target);
        }
    }

    /// Navigate to the parent directory
    fn navigate_to_parent(&mut self) {
        if let Some(parent) = self.current_dir.parent() {
            self.current_dir = parent.to_path_buf();
            self.query.clear();
            self.update_entries();
        }
    }

    /// Show the picker window.
    pub fn show(&mut self, ctx: &Context) {
        if self.status != ImagePickerStatus::Open {
            return;
        }

        ctx.memory_mut(|mem| mem.request_focus(egui::Id::new("image_picker_query")));

        let mut query_changed = false;
        let mut navigate_parent = false;
        let mut accept = false;

        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                self.status = ImagePickerStatus::Closed;
            }
            if i.key_pressed(Key::Enter) {
                accept = true;
            }
            if i.key_pressed(Key::Backspace) && self.query.is_empty() {
                navigate_parent = true;
            }
            if i.key_pressed(Key::ArrowDown) {
                if let Some(idx) = self.selected_index {
                    if idx + 1 < self.filtered_entries.len() {
                        self.selected_index = Some(idx + 1);
                    }
                }
            }
            if i.key_pressed(Key::ArrowUp) {
                if let Some(idx) = self.selected_index {
                    self.selected_index = Some(idx.saturating_sub(1));
                }
            }
        });

        if self.status != ImagePickerStatus::Open {
            return;
        }
        if navigate_parent {
            self.navigate_to_parent();
        }

        let screen_rect = ctx.screen_rect();
        let window_width = screen_rect.width() * 0.5;
        let window_height = screen_rect.height() * 0.6;

        egui::Window::new("Select Image")
            .fixed_size([window_width, window_height])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(self.current_dir.display().to_string())
                        .small()
                        .color(ui.visuals().weak_text_color()),
                );

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.query)
                        .id(egui::Id::new("image_picker_query"))
                        .hint_text("Type to filter, Enter to select, Backspace for parent")
                        .desired_width(f32::INFINITY),
                );
                if response.changed() {
                    query_changed = true;
                }

                if let Some(error) = &self.error_message {
                    ui.colored_label(ui.visuals().error_fg_color, error);
                }

                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (idx, (name, is_dir)) in self.filtered_entries.iter().enumerate() {
                        let label = if *is_dir {
                            format!("🗀 {}", name)
                        } else {
                            format!("🖼 {}", name)
                        };
                        let selected = self.selected_index == Some(idx);
                        if ui.selectable_label(selected, label).clicked() {
                            self.selected_index = Some(idx);
                            accept = true;
                        }
                    }
                });
            });

        if query_changed {
            self.error_message = None;
            self.update_entries();
        }
        if accept {
            self.accept_selection();
        }
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Handle to a background image-load job.
pub struct ImageLoadHandle {
    rx: mpsc::Receiver<anyhow::Result<String>>,
}

impl ImageLoadHandle {
    /// Poll for the result without blocking. Returns `None` while the job is
    /// still running.
    pub fn try_recv(&self) -> Option<anyhow::Result<String>> {
        self.rx.try_recv().ok()
    }

    /// Block until the job finishes. Intended for tests.
    pub fn recv(&self) -> Option<anyhow::Result<String>> {
        self.rx.recv().ok()
    }
}

/// Read `path` on a background thread and deliver it as a
/// `data:<mime>;base64,...` URI suitable for direct display.
pub fn load_image_as_data_uri(path: PathBuf) -> ImageLoadHandle {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let _ = tx.send(read_and_encode(&path));
    });
    ImageLoadHandle { rx }
}

fn read_and_encode(path: &Path) -> anyhow::Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let format = image::guess_format(&bytes)
        .with_context(|| format!("{} is not a recognized image format", path.display()))?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{}", format.to_mime_type(), encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Magic bytes are all `image::guess_format` inspects
    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn encodes_a_png_file_as_a_data_uri() {
        let mut file = tempfile::NamedTempFile::with_suffix(".png").unwrap();
        file.write_all(&PNG_SIGNATURE).unwrap();
        file.flush().unwrap();

        let uri = read_and_encode(file.path()).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn rejects_a_non_image_file() {
        let mut file = tempfile::NamedTempFile::with_suffix(".png").unwrap();
        file.write_all(b"definitely not an image").unwrap();
        file.flush().unwrap();

        let err = read_and_encode(file.path()).unwrap_err();
        assert!(err.to_string().contains("not a recognized image format"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = read_and_encode(Path::new("/nonexistent/image.png")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/image.png"));
    }

    #[test]
    fn image_extension_check_is_case_insensitive() {
        assert!(has_image_extension(Path::new("photo.PNG")));
        assert!(has_image_extension(Path::new("photo.jpeg")));
        assert!(!has_image_extension(Path::new("notes.txt")));
        assert!(!has_image_extension(Path::new("no_extension")));
    }
}
