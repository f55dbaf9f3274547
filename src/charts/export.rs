//! Static Chart Export
//! Renders the session chart to a PNG file with plotters.

use crate::charts::ChartRenderer;
use crate::session::Session;
use anyhow::{anyhow, Result};
use plotters::prelude::*;
use std::path::Path;

/// Writes a static scatter/line chart of the session.
pub struct ChartExporter;

impl ChartExporter {
    /// Render the voltage vs. current chart to `path` as a PNG.
    pub fn export_png(session: &Session, path: &Path, width: u32, height: u32) -> Result<()> {
        let max_voltage = ChartRenderer::max_or_one(&session.voltages());
        let max_current = ChartRenderer::max_or_one(&session.currents());

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| anyhow!("failed to clear chart background: {e}"))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption("Voltage vs Current", ("sans-serif", 22))
            .x_label_area_size(40)
            .y_label_area_size(55)
            .build_cartesian_2d(0.0..max_voltage, 0.0..max_current)
            .map_err(|e| anyhow!("failed to lay out chart: {e}"))?;

        chart
            .configure_mesh()
            .x_labels(11)
            .y_labels(11)
            .x_desc("Voltage (V)")
            .y_desc("Current (A)")
            .draw()
            .map_err(|e| anyhow!("failed to draw chart grid: {e}"))?;

        let series: Vec<(f64, f64)> = session
            .samples()
            .iter()
            .map(|s| (s.voltage, s.current))
            .collect();

        chart
            .draw_series(LineSeries::new(series.iter().copied(), &BLUE))
            .map_err(|e| anyhow!("failed to draw line series: {e}"))?;
        chart
            .draw_series(
                series
                    .iter()
                    .map(|&(v, c)| Circle::new((v, c), 4, BLUE.filled())),
            )
            .map_err(|e| anyhow!("failed to draw markers: {e}"))?;

        root.present()
            .map_err(|e| anyhow!("failed to write chart to {}: {e}", path.display()))?;
        Ok(())
    }
}
