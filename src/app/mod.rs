//! Core application modules for Prompt Architect.
//!
//! This module contains the catalog data model, the pure filtering and
//! publishing logic, and the desktop UI built on top of them.
//!
//! # Module Organization
//!
//! ## Catalog Core
//! - [`catalog`] - Prompt entities, categories, the seed data set, and the
//!   owned in-memory collection
//! - [`filter`] - Pure category + text filtering over the catalog
//! - [`publisher`] - Draft validation and construction of new entries
//!
//! ## UI and Infrastructure
//! - [`archui`] - Complete user interface implementation with window
//!   management
//! - [`notifications`] - Transient toast feedback
//!
//! # Architecture
//!
//! [`archui::app::ArchitectApp`] exclusively owns the
//! [`catalog::PromptCatalog`]. The filter engine reads it, the publisher
//! produces candidate entities for it, and every window communicates back
//! through action enums rather than mutating shared state.

pub mod archui;
pub mod catalog;
pub mod filter;
pub mod notifications;
pub mod publisher;

pub use archui::app::ArchitectApp;

/// Whether this build exposes the publish entry points (navbar button,
/// publish window, image picker).
///
/// Flipped by the `admin` cargo feature. This gates reachability only; it is
/// a build-mode switch, not a security boundary.
pub const ADMIN_BUILD: bool = cfg!(feature = "admin");
