//! Chart Plotter
//! Interactive voltage/current view built on egui_plot.

use crate::session::Session;
use egui::Color32;
use egui_plot::{Line, Plot, PlotPoints, Points};

/// Color for the recorded series.
pub const SERIES_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

/// Creates the interactive chart view using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the voltage vs. current chart with zoom and drag enabled.
    pub fn draw_vi_chart(ui: &mut egui::Ui, session: &Session) {
        let points_vec: Vec<[f64; 2]> = session
            .samples()
            .iter()
            .map(|s| [s.voltage, s.current])
            .collect();

        Plot::new("vi_plot")
            .x_axis_label("Voltage (V)")
            .y_axis_label("Current (A)")
            .allow_scroll(false)
            .include_x(0.0)
            .include_y(0.0)
            .show(ui, |plot_ui| {
                if points_vec.is_empty() {
                    return;
                }

                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points_vec.iter().copied()))
                        .color(SERIES_COLOR)
                        .width(1.5)
                        .name("Samples"),
                );

                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points_vec.iter().copied()))
                        .radius(3.0)
                        .color(SERIES_COLOR)
                        .name("Samples"),
                );
            });
    }
}
