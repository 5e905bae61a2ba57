#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use doccards_core::{LinkRegistry, ThemeMode};

use crate::context::LaunchSettings;

/// Launch settings, set once from the command line
static SETTINGS: OnceLock<LaunchSettings> = OnceLock::new();

/// Get the launch settings (defaults if main never set them)
pub fn launch_settings() -> LaunchSettings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// doccards - documentation quick start cards
#[derive(Parser, Debug)]
#[command(name = "doccards-desktop")]
#[command(about = "Documentation quick start cards - desktop preview")]
struct Args {
    /// Initial theme name ("light"; anything else renders dark)
    #[arg(short, long, default_value = "dark")]
    theme: String,

    /// Link configuration file (JSON)
    #[arg(short, long)]
    links: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let links = LinkRegistry::discover(args.links.as_deref())?;

    tracing::info!(
        theme = %ThemeMode::from_resolved(Some(args.theme.as_str())),
        links = ?args.links,
        "Starting doccards desktop"
    );

    let _ = SETTINGS.set(LaunchSettings {
        theme: args.theme,
        links,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("doccards")
            .with_inner_size(dioxus::desktop::LogicalSize::new(900.0, 700.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
