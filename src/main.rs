//! Ohm's Law Lab - Interactive Circuit Measurement & Chart Viewer
//!
//! A Rust application for simulating Ohm's law measurements and displaying
//! the recorded voltage/current samples as a table and chart.

mod charts;
mod circuit;
mod gui;
mod session;
mod stats;

use eframe::egui;
use gui::OhmLabApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Ohm's Law Lab"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Ohm's Law Lab",
        options,
        Box::new(|cc| Ok(Box::new(OhmLabApp::new(cc)))),
    )
}
