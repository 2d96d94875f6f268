#![allow(non_snake_case)]

mod app;
mod components;
mod config;
pub mod context;
mod pages;
mod platform;
mod theme;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use surat_natal_core::logging::LoggingBuilder;

use crate::config::{AppConfig, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_args(&args)?;

    let mut logging = LoggingBuilder::new(&config.logs_dir, &args.instance);
    if let Some(filter) = &args.log_filter {
        logging = logging.with_filter(filter);
    }
    if args.no_console {
        logging = logging.no_console();
    }
    let log_path = logging.init().context("Failed to install logging")?;

    tracing::info!(
        instance = %args.instance,
        downloads = %config.downloads_dir.display(),
        log_file = ?log_path,
        music = config.music.is_some(),
        "Starting card maker"
    );

    let title = config.content().page_title;
    context::set_app_config(config);

    // Phone-like portrait window
    let window_width = 520.0;
    let window_height = 1000.0;

    let desktop = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(desktop)
        .launch(app::App);

    Ok(())
}
