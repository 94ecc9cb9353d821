//! Prompt Architect - Curated AI Prompt Gallery
//!
//! Prompt Architect is a desktop application for browsing a curated gallery of
//! AI image-generation prompts ("directives"). Each entry pairs the directive
//! text with a preview image, category tag, author, and usage tips. Users can
//! filter by category, search the library, inspect a prompt in detail, and
//! copy its text to the clipboard. Builds with the `admin` feature additionally
//! expose a publishing form for adding new entries with an image from disk.
//!
//! # Architecture Overview
//!
//! The application follows a layered architecture with clear separation of
//! concerns:
//!
//! - **UI Layer** ([`app::archui`]): egui-based desktop interface with window
//!   management
//! - **Catalog Core** ([`app::catalog`], [`app::filter`], [`app::publisher`]):
//!   the in-memory prompt collection and the pure logic operating on it
//! - **Notifications** ([`app::notifications`]): transient toast feedback
//!
//! ## Key Architectural Patterns
//!
//! - **Trait-based Window System**: polymorphic window management with
//!   [`app::archui::window_focus::FocusableWindow`]
//! - **Derived Filtering**: the visible prompt set is recomputed from
//!   catalog + category + query on every frame, never cached
//! - **Session-local State**: the catalog lives for one run of the process
//!   and reseeds on restart; only the UI theme persists
//!
//! The main application entry point is [`ArchitectApp`], which owns the
//! catalog and coordinates all windows.

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub use app::ArchitectApp;
