//! # CLI Module
//!
//! The terminal host for the storefront engine.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing (clap)
//! - `commands`: Main dispatch and command handlers
//! - `host`: The terminal as viewport and layout engine
//! - `render`: Output rendering through minijinja templates
//! - `styles`: Console styles
//! - `templates`: Template definitions

mod commands;
mod host;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
