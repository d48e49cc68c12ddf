//! # CLI Layer
//!
//! This module is **one possible host** for the storefront engine. A browser
//! shell would drive the same [`Storefront`] with real clicks and a real
//! viewport; here the terminal stands in for both.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves configuration and boots the storefront
//! - `handle_*()`: Per-command handlers that drive the storefront and print

use super::host::TerminalHost;
use super::render::{print_messages, TextRenderer};
use super::setup::{Cli, Commands, ListArgs, OutputFormat};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vitrine::api::Storefront;
use vitrine::catalog::source_for;
use vitrine::commands::CmdMessage;
use vitrine::config::VitrineConfig;
use vitrine::error::Result;
use vitrine::model::FacetKey;
use vitrine::page::Page;
use vitrine::ui::{ClickEvent, Interaction, Region};

struct AppContext {
    storefront: Storefront,
    host: TerminalHost,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let mut cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(&cli)?;

    // Config needs no catalog; every other command boots the storefront.
    match cli.command.take() {
        Some(Commands::Config) => handle_config(&config),
        Some(Commands::Facets { facet }) => handle_facets(&init_context(&cli, config)?, facet),
        Some(Commands::List(args)) => handle_list(&mut init_context(&cli, config)?, args),
        None => handle_list(&mut init_context(&cli, config)?, ListArgs::default()),
    }
}

fn init_tracing(verbose: bool, no_color: bool) {
    let default_filter = if verbose { "vitrine=debug" } else { "vitrine=warn" };
    // An already installed subscriber wins.
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(!no_color),
        )
        .try_init();
}

fn config_dir(cli: &Cli) -> Option<PathBuf> {
    cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "vitrine", "vitrine").map(|dirs| dirs.config_dir().to_path_buf())
    })
}

fn load_config(cli: &Cli) -> Result<VitrineConfig> {
    let config = match config_dir(cli) {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "loading config");
            VitrineConfig::load(&dir)?
        }
        None => VitrineConfig::default(),
    };

    Ok(match &cli.data {
        Some(data) => config.with_data_source(data.clone()),
        None => config,
    })
}

fn init_context(cli: &Cli, config: VitrineConfig) -> Result<AppContext> {
    let page = Page::from_path(&cli.page);
    let source = source_for(&config.data_source);
    let mut host = TerminalHost::new();

    let mut storefront = Storefront::boot(config, page, source.as_ref(), &mut host)?;
    if let Some(err) = storefront.take_load_error() {
        print_messages(&storefront.listing().messages);
        return Err(err);
    }

    Ok(AppContext {
        storefront,
        host,
        use_color: !cli.no_color && Term::stdout().features().colors_supported(),
    })
}

fn handle_list(ctx: &mut AppContext, args: ListArgs) -> Result<()> {
    let selection = args.selection();
    if selection.is_filtering() {
        ctx.storefront.apply_selection(selection, &mut ctx.host)?;
    }

    let mut messages = Vec::new();
    for position in &args.expand {
        let card = position
            .checked_sub(1)
            .and_then(|index| ctx.storefront.surface().handle_at(index));
        let toggled = match card {
            Some(card) => ctx
                .storefront
                .on_click(ClickEvent::on_card(card, Region::Title), &ctx.host)?,
            None => None,
        };
        match toggled {
            Some(Interaction::Toggled { .. }) => {}
            _ => messages.push(CmdMessage::warning(format!(
                "No card at position {}",
                position
            ))),
        }
    }

    let entries = ctx.host.in_view();
    ctx.storefront.on_intersections(&entries, &mut ctx.host)?;

    let listing = ctx.storefront.listing();
    match args.format {
        OutputFormat::Html => println!("{}", ctx.storefront.surface().markup()),
        OutputFormat::Text => {
            if !listing.listed_items.is_empty() {
                let renderer = TextRenderer::new(ctx.use_color)?;
                let play_label = &ctx.storefront.config().labels.play;
                print!(
                    "{}",
                    renderer.render_cards(ctx.storefront.surface().cards(), play_label)?
                );
            }
            print_messages(&listing.messages);
        }
    }
    print_messages(&messages);
    Ok(())
}

fn handle_facets(ctx: &AppContext, facet: Option<FacetKey>) -> Result<()> {
    let keys = match facet {
        Some(key) => vec![key],
        None => FacetKey::ALL.to_vec(),
    };
    let renderer = TextRenderer::new(ctx.use_color)?;
    print!("{}", renderer.render_facets(ctx.storefront.facets(), &keys)?);
    Ok(())
}

fn handle_config(config: &VitrineConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
