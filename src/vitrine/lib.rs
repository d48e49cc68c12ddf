//! # Vitrine Architecture
//!
//! Vitrine is the catalog engine behind a media storefront (beats, sample and
//! plugin kits, articles). It loads the item collection once, lets a visitor
//! narrow it by free-text search and four facets, and renders the result as
//! interactive cards.
//!
//! Like its CLI, a browser shell or any other host is just a client: the
//! engine never draws, scrolls or listens to anything itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (cli/ in the binary, or a browser shell)              │
//! │  - Supplies page identity, events, viewport, measurements   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storefront (api.rs)                                        │
//! │  - Application context created once at startup              │
//! │  - Owns selection, runs filter → render → attach per event  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                ┌─────────────┼──────────────┐
//!                ▼             ▼              ▼
//! ┌───────────────────┐ ┌─────────────┐ ┌──────────────────────┐
//! │ commands/         │ │ render/     │ │ ui/                  │
//! │ facets, filtering │ │ card markup │ │ surface, router,     │
//! │ (pure)            │ │ (pure)      │ │ accordion, reveal    │
//! └───────────────────┘ └─────────────┘ └──────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog/)                                         │
//! │  - CatalogSource trait: file, HTTP, in-memory               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Execution Model
//!
//! Single-threaded and event-driven. The catalog load is the only operation
//! that waits on the outside world; everything after it (filtering, rendering,
//! toggling, revealing) runs to completion inside one event. The loaded items
//! are written once and only read afterwards, and the selection has a single
//! writer, the [`api::Storefront`].
//!
//! ## Module Overview
//!
//! - [`api`]: the storefront facade and event entry points
//! - [`catalog`]: item sources and the loaded catalog
//! - [`commands`]: facet indexing and the filter engine
//! - [`render`]: card markup
//! - [`ui`]: container surface, delegated events, accordion, reveal-on-visibility
//! - [`model`]: `Item` and the small types derived from it
//! - [`page`]: page identity and base constraints
//! - [`config`]: configuration and visitor-facing labels
//! - [`error`]: error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod page;
pub mod render;
pub mod ui;
