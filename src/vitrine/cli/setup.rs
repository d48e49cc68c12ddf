use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use vitrine::commands::filter::FilterSelection;
use vitrine::model::FacetKey;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled terminal cards
    #[default]
    Text,
    /// The container markup, as a browser would receive it
    Html,
}

#[derive(Parser, Debug)]
#[command(
    name = "vitrine",
    bin_name = "vitrine",
    version = env!("CARGO_PKG_VERSION")
)]
#[command(about = "Browse a media storefront catalog from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Item collection to load: a file path or an http(s) URL
    #[arg(short, long, global = true, help_heading = "Options")]
    pub data: Option<String>,

    /// Page being displayed, e.g. beats.html, loja.html or /
    #[arg(short, long, global = true, default_value = "/", help_heading = "Options")]
    pub page: String,

    /// Directory holding config.json
    #[arg(long, global = true, help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the cards shown on the page
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Show the options of the selection controls
    #[command(display_order = 2)]
    Facets {
        /// Only this control: genre, category, year or type
        #[arg(value_parser = parse_facet)]
        facet: Option<FacetKey>,
    },

    /// Print the effective configuration
    #[command(display_order = 3)]
    Config,
}

#[derive(Args, Debug, Default, Clone)]
pub struct ListArgs {
    /// Search term, matched against title, description and content
    #[arg(short, long)]
    pub search: Option<String>,

    /// Genre to select
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Category to select
    #[arg(short, long)]
    pub category: Option<String>,

    /// Year to select
    #[arg(short, long)]
    pub year: Option<String>,

    /// Type to select
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Card positions (1-based) whose title gets clicked before printing
    #[arg(short, long, num_args = 1.., value_name = "POS")]
    pub expand: Vec<usize>,
}

fn parse_facet(value: &str) -> Result<FacetKey, String> {
    value.parse::<FacetKey>().map_err(|e| e.to_string())
}

impl ListArgs {
    /// The visitor selection these flags describe.
    pub fn selection(&self) -> FilterSelection {
        let facets = [
            (FacetKey::Genre, &self.genre),
            (FacetKey::Category, &self.category),
            (FacetKey::Year, &self.year),
            (FacetKey::Type, &self.kind),
        ];

        facets.into_iter().fold(
            FilterSelection::new().with_search(self.search.clone().unwrap_or_default()),
            |selection, (key, value)| match value {
                Some(value) => selection.with_facet(key, value.clone()),
                None => selection,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn defaults_to_home_page_and_no_command() {
        let cli = parse(&["vitrine"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.page, "/");
        assert!(cli.data.is_none());
    }

    #[test]
    fn list_flags_become_a_selection() {
        let cli = parse(&[
            "vitrine", "list", "--search", "trap", "--genre", "Trap", "--type", "Beat",
        ]);
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list");
        };
        let selection = args.selection();
        assert_eq!(selection.search, "trap");
        assert_eq!(selection.genre, "Trap");
        assert_eq!(selection.kind, "Beat");
        assert_eq!(selection.year, "");
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli = parse(&["vitrine", "ls", "--page", "beats.html", "--no-color", "-v"]);
        assert_eq!(cli.page, "beats.html");
        assert!(cli.no_color);
        assert!(cli.verbose);
    }

    #[test]
    fn expand_takes_several_positions() {
        let cli = parse(&["vitrine", "list", "--expand", "1", "3", "--format", "html"]);
        let Some(Commands::List(args)) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.expand, vec![1, 3]);
        assert_eq!(args.format, OutputFormat::Html);
    }

    #[test]
    fn facets_accepts_portuguese_names() {
        let cli = parse(&["vitrine", "facets", "ano"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Facets {
                facet: Some(FacetKey::Year)
            })
        ));
        assert!(Cli::try_parse_from(["vitrine", "facets", "mood"]).is_err());
    }

    #[test]
    fn empty_list_args_do_not_filter() {
        assert!(!ListArgs::default().selection().is_filtering());
    }
}
