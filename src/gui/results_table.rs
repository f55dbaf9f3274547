//! Results Table Widget
//! Central scrollable table mirroring the session, with a summary footer.

use crate::session::Session;
use crate::stats::SessionSummary;
use egui::{RichText, ScrollArea};

/// Scrollable measurement table, one row per recorded sample.
pub struct ResultsTable;

impl ResultsTable {
    pub fn show(ui: &mut egui::Ui, session: &Session) {
        if session.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No measurements yet").size(20.0));
            });
            return;
        }

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("results_table")
                    .striped(true)
                    .min_col_width(140.0)
                    .spacing([12.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Voltage (V)").strong());
                        ui.label(RichText::new("Current (A)").strong());
                        ui.end_row();

                        for sample in session.samples() {
                            ui.label(format!("{:?}", sample.voltage));
                            ui.label(format!("{:?}", sample.current));
                            ui.end_row();
                        }
                    });

                if let Some(summary) = SessionSummary::from_samples(session.samples()) {
                    ui.add_space(10.0);
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(format!("N: {}", summary.count)).size(11.0));
                        ui.add_space(10.0);
                        ui.label(
                            RichText::new(format!("Max V: {:.3}", summary.max_voltage)).size(11.0),
                        );
                        ui.add_space(10.0);
                        ui.label(
                            RichText::new(format!("Max I: {:.3}", summary.max_current)).size(11.0),
                        );
                        ui.add_space(10.0);
                        ui.label(
                            RichText::new(format!("Mean I: {:.3}", summary.mean_current))
                                .size(11.0),
                        );
                    });
                }
            });
    }
}
