//! Seek Desktop Application
//!
//! A single search field that hands the typed term to a callback once typing
//! pauses.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod hooks;

use dioxus::desktop::{Config, WindowBuilder};
use seek_core::SearchSettings;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("seek_desktop=debug".parse().unwrap())
                .add_directive("seek_core=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Seek...");

    let settings = load_settings();
    tracing::debug!(
        "Search settings: debounce={}ms placeholder={:?}",
        settings.debounce_ms,
        settings.placeholder
    );

    let config = Config::new().with_window(WindowBuilder::new().with_title("Seek"));

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .with_context(settings)
        .launch(app::App);
}

/// Resolve settings from the environment.
///
/// A broken settings file or override is logged and replaced by the defaults
/// so the window still opens.
fn load_settings() -> SearchSettings {
    SearchSettings::from_env().unwrap_or_else(|error| {
        tracing::warn!("Failed to load search settings: {}", error);
        SearchSettings::default()
    })
}
