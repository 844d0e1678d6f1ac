use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use site_core::{load_settings, HttpContactRelay};

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::PortfolioApp;

#[derive(Parser, Debug)]
#[command(name = "portfolio_gui")]
struct Args {
    /// Settings file; defaults to `portfolio.toml` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let settings = load_settings(args.config.as_deref())?;
    let relay = HttpContactRelay::from_settings(&settings)?;
    tracing::info!(endpoint = %relay.endpoint(), "contact relay configured");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, Arc::new(relay));

    let title = format!("{} | {}", settings.owner.name, settings.owner.role);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([420.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(PortfolioApp::new(cc, cmd_tx, ui_rx, settings)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
    .context("portfolio window exited with an error")
}
