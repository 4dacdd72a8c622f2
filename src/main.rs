//! Itemforge - desktop editor for XML item catalogs
//!
//! Load a catalog, search items by name, edit their attributes and save the result.

mod app;
mod core;
mod ui;

use app::ItemforgeApp;
use crate::core::config::AppConfig;
use crate::core::language::Labels;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Itemforge...");

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    let lang_dir = config.get_lang_dir();
    let loaded = Labels::load(&lang_dir, &config.language).inspect_err(|e| {
        tracing::error!("Cannot load language pack from {}: {:#}", lang_dir.display(), e);
    })?;
    tracing::info!("Using language: {}", loaded.language);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Item Management Tool")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Itemforge",
        native_options,
        Box::new(move |cc| Ok(Box::new(ItemforgeApp::new(cc, config, loaded)))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}
