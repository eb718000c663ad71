//! Viewers for the `sigma*.txt` outputs of a 1-D Gaussian smoothing exercise.
//!
//! Each binary picks one [`Mode`]; [`run`] loads that mode's files from the
//! working directory and shows the chart until the window is closed.

pub mod app;
pub mod chart;
pub mod color;
pub mod data;
pub mod mode;
pub mod ui;

use anyhow::{Context, Result, anyhow};
use eframe::egui;

use app::SigmaPlotApp;
pub use mode::Mode;

/// Load the inputs for `mode` and block in the plot window until it closes.
///
/// All files are read before the window is created; a missing or malformed
/// file returns an error and no window is opened.
pub fn run(mode: Mode) -> Result<()> {
    let dir = std::env::current_dir().context("resolving working directory")?;
    log::info!("{mode:?}: reading inputs from {}", dir.display());

    let chart = mode
        .prepare(&dir)
        .inspect_err(|e| log::error!("Failed to load input: {e}"))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(mode.title())
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        mode.title(),
        options,
        Box::new(move |_cc| Ok(Box::new(SigmaPlotApp::new(chart)))),
    )
    .map_err(|e| anyhow!("plot window failed: {e}"))
}
