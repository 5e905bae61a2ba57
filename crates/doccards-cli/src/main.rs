//! doccards CLI
//!
//! Thin wrapper around doccards-core for inspecting and statically rendering
//! the quick start cards.
//!
//! ## Usage
//!
//! ```bash
//! # List the quick start cards and where they lead
//! doccards list
//!
//! # Show the resolved card style for a theme
//! doccards style --theme light --hovered
//!
//! # Render the grid as HTML, second card hovered
//! doccards render --theme dark --hover 1
//!
//! # Machine-readable card list
//! doccards list --format json
//!
//! # Render the view tree as JSON with custom links
//! doccards --links links.json render --format json
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use doccards_core::view::card_grid;
use doccards_core::{quick_start_cards, CardStyle, HoverState, LinkRegistry, ThemeMode};

/// doccards - documentation quick start cards
#[derive(Parser)]
#[command(name = "doccards")]
#[command(version = "0.1.0")]
#[command(about = "Inspect and render documentation quick start cards")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Link configuration file (JSON)
    #[arg(short, long, global = true)]
    links: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the quick start cards in display order
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Print the resolved card style
    Style {
        /// Resolved theme name; anything but "light" renders dark
        #[arg(short, long, default_value = "dark")]
        theme: String,

        /// Style the card as hovered
        #[arg(long)]
        hovered: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// Render the quick start grid
    Render {
        /// Resolved theme name; anything but "light" renders dark
        #[arg(short, long, default_value = "dark")]
        theme: String,

        /// Index of the card to render as hovered
        #[arg(long)]
        hover: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let links = LinkRegistry::discover(cli.links.as_deref())?;

    match cli.command {
        Commands::List { format: Format::Json } => {
            let cards = quick_start_cards(&links);
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }

        Commands::List { .. } => {
            for (i, card) in quick_start_cards(&links).iter().enumerate() {
                let destination = card.destination();
                println!("{}. {}", i + 1, card.title);
                println!("   {}", card.description);
                println!("   -> {} ({})", destination.href(), destination.kind());
            }
        }

        Commands::Style {
            theme,
            hovered,
            format,
        } => {
            let mode = ThemeMode::from_resolved(Some(theme.as_str()));
            let style = CardStyle::resolve(mode, HoverState::from(hovered));
            tracing::info!(%mode, hovered, "Resolved card style");

            if matches!(format, Format::Json) {
                println!("{}", serde_json::to_string_pretty(&style)?);
                return Ok(());
            }

            println!("theme:      {}", style.theme);
            println!("background: {}", style.background);
            println!("accent:     {}", style.accent);
            println!("border:     {}", style.border);
        }

        Commands::Render {
            theme,
            hover,
            format,
        } => {
            let mode = ThemeMode::from_resolved(Some(theme.as_str()));
            let cards = quick_start_cards(&links);
            if let Some(index) = hover.filter(|i| *i >= cards.len()) {
                tracing::warn!(index, "Hover index out of range, no card hovered");
            }
            let tree = card_grid(&cards, mode, hover);

            match format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&tree)?),
                Format::Text | Format::Html => println!("{tree}"),
            }
        }
    }

    Ok(())
}
