pub mod config;
pub mod overlay;
pub mod sampler;
pub mod ui;

use crate::config::OverlayLayout;
use crate::sampler::GamepadSampler;
use crate::ui::PadscopeApp;
use color_eyre::{eyre::eyre, Result};
use eframe::egui;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    setup()?;

    let layout = OverlayLayout::load_or_default();
    info!("Overlay layout ready with {} slots", layout.slot_count());

    let sampler = GamepadSampler::create(layout.slot_count())
        .map_err(|e| eyre!("Failed to start gamepad sampler: {}", e))?
        .initialize();
    info!("Sampling {} controller slots per frame", sampler.slot_count());

    // UI starten
    info!("Starting overlay UI");
    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = egui::ViewportBuilder::default().with_inner_size([800.0, 480.0]);

    eframe::run_native(
        "Padscope",
        native_options,
        Box::new(move |cc| Ok(Box::new(PadscopeApp::new(cc, sampler, layout)))),
    )
    .map_err(|e| eyre!("UI terminated with error: {}", e))?;

    Ok(())
}

fn setup() -> Result<()> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        std::env::set_var("RUST_LIB_BACKTRACE", "0")
    }
    color_eyre::install()?;
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    setup_logging_env();
    Ok(())
}

fn setup_logging_env() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .init();
}
