//! # Vitrine CLI
//!
//! A terminal host for the storefront engine. The binary stays thin: the CLI
//! lives in `cli/`, and this file only invokes `cli::run()` and handles process
//! termination.
//!
//! The terminal plays the part a browser plays for the storefront: it names
//! the page, feeds the visitor's inputs, and acts as viewport and layout
//! engine. Every printed card counts as fully visible; detail heights are
//! measured in printed lines.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
