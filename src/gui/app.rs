//! Ohm's Law Lab Application
//! Main window wiring the control panel, results table, and graph window.

use crate::charts::ChartExporter;
use crate::circuit;
use crate::gui::{ControlPanel, ControlPanelAction, GraphWindow, ResultsTable, UserSettings};
use crate::session::{FileSink, Session};
use egui::SidePanel;
use tracing::{error, info};

/// Exported chart image size in pixels.
const CHART_PNG_SIZE: (u32, u32) = (1000, 700);

/// Main application window.
pub struct OhmLabApp {
    session: Session,
    control_panel: ControlPanel,
    graph_window: GraphWindow,
    error_dialog: Option<String>,
}

impl OhmLabApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: UserSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self {
            session: Session::new(),
            control_panel: ControlPanel::new(settings),
            graph_window: GraphWindow::default(),
            error_dialog: None,
        }
    }

    /// Run one measurement and append it to the session.
    fn handle_calculate(&mut self) {
        let voltage = f64::from(self.control_panel.settings.voltage);
        let resistance = self.control_panel.settings.preset.ohms();

        match circuit::calculate_current(voltage, resistance) {
            Ok(current) => {
                self.session.record(voltage, current);
                info!(voltage, resistance, current, "recorded sample");
                self.control_panel
                    .set_status(&format!("Recorded {} sample(s)", self.session.len()));
            }
            Err(e) => {
                error!(%e, "calculation rejected");
                self.error_dialog = Some(e.to_string());
            }
        }
    }

    /// Ask for a target file and rewrite it from the session.
    fn handle_save(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Text Files", &["txt"])
            .set_file_name("results.txt")
            .save_file()
        else {
            return; // User cancelled
        };

        let sink = FileSink::new(path);
        match sink.write(&self.session) {
            Ok(()) => {
                info!(path = %sink.path().display(), samples = self.session.len(), "results saved");
                self.control_panel.set_status(&format!(
                    "Saved {} line(s) to {}",
                    self.session.len(),
                    sink.path().display()
                ));
                self.control_panel.settings.save_path = Some(sink.path().to_path_buf());
            }
            Err(e) => {
                error!(%e, "save failed");
                self.error_dialog = Some(e.to_string());
            }
        }
    }

    /// Ask for a target file and render the chart image into it.
    fn handle_export_png(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("ohm_chart.png")
            .save_file()
        else {
            return; // User cancelled
        };

        let (width, height) = CHART_PNG_SIZE;
        match ChartExporter::export_png(&self.session, &path, width, height) {
            Ok(()) => {
                info!(path = %path.display(), "chart exported");
                self.control_panel
                    .set_status(&format!("Exported chart to {}", path.display()));
            }
            Err(e) => {
                error!(%e, "chart export failed");
                self.error_dialog = Some(format!("{e:#}"));
            }
        }
    }

    /// Reveal the saved results file with the system default app.
    fn handle_open_saved(&mut self) {
        if let Some(path) = &self.control_panel.settings.save_path {
            if let Err(e) = open::that(path) {
                self.error_dialog = Some(format!("Failed to open {}: {e}", path.display()));
            }
        }
    }

    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let mut dismissed = false;

        if let Some(message) = &self.error_dialog {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("OK").clicked() {
                            dismissed = true;
                        }
                    });
                });
        }

        if dismissed {
            self.error_dialog = None;
        }
    }
}

impl eframe::App for OhmLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::Calculate => self.handle_calculate(),
                        ControlPanelAction::Save => self.handle_save(),
                        ControlPanelAction::ShowGraph => self.graph_window.open = true,
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::CopyResults => {
                            ctx.copy_text(self.session.export());
                            self.control_panel
                                .set_status(&format!("Copied {} line(s)", self.session.len()));
                        }
                        ControlPanelAction::OpenSaved => self.handle_open_saved(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Results Table
        egui::CentralPanel::default().show(ctx, |ui| {
            ResultsTable::show(ui, &self.session);
        });

        self.graph_window.show(ctx, &self.session);
        self.show_error_dialog(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.control_panel.settings);
    }
}
