//! Control Panel Widget
//! Left side panel with the voltage slider, resistance presets, and actions.

use crate::circuit::ResistancePreset;
use egui::{Color32, RichText};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User-adjustable inputs, persisted across runs.
#[derive(Clone, Serialize, Deserialize)]
pub struct UserSettings {
    pub voltage: u32,
    pub preset: ResistancePreset,
    pub save_path: Option<PathBuf>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            voltage: 1,
            preset: ResistancePreset::default(),
            save_path: None,
        }
    }
}

/// Left side control panel with circuit inputs and action buttons.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: UserSettings::default(),
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new(settings: UserSettings) -> Self {
        Self {
            settings,
            status: "Ready".to_string(),
        }
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("⚡ Ohm's Law Lab")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(RichText::new("I = V / R").size(11.0).color(Color32::GRAY));
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Power Supply Section =====
        ui.label(RichText::new("🔋 Power Supply").size(14.0).strong());
        ui.add_space(5.0);

        ui.add(
            egui::Slider::new(&mut self.settings.voltage, 0..=1000)
                .suffix(" V")
                .text("Voltage"),
        );

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Resistance Section =====
        ui.label(RichText::new("⚙ Resistance").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            for preset in ResistancePreset::ALL {
                ui.radio_value(&mut self.settings.preset, preset, preset.label());
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Action Buttons =====
        ui.vertical_centered(|ui| {
            let calculate = egui::Button::new(RichText::new("▶ Calculate").size(16.0))
                .min_size(egui::vec2(180.0, 35.0));
            if ui.add(calculate).clicked() {
                action = ControlPanelAction::Calculate;
            }

            ui.add_space(8.0);

            let save = egui::Button::new(RichText::new("💾 Save to File").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(save).clicked() {
                action = ControlPanelAction::Save;
            }

            ui.add_space(8.0);

            let graph = egui::Button::new(RichText::new("📈 Show Graph").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(graph).clicked() {
                action = ControlPanelAction::ShowGraph;
            }

            ui.add_space(8.0);

            let export = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(export).clicked() {
                action = ControlPanelAction::ExportPng;
            }

            ui.add_space(8.0);

            let copy = egui::Button::new(RichText::new("📋 Copy Results").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(copy).clicked() {
                action = ControlPanelAction::CopyResults;
            }
        });

        // ===== Saved File Section =====
        if let Some(path) = self.settings.save_path.clone() {
            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.label(RichText::new("📁 Results File").size(14.0).strong());
            ui.add_space(5.0);

            egui::Frame::none()
                .fill(ui.visuals().widgets.noninteractive.bg_fill)
                .rounding(5.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_else(|| path.display().to_string());
                        ui.label(RichText::new(name).size(12.0));

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("📂 Open").clicked() {
                                action = ControlPanelAction::OpenSaved;
                            }
                        });
                    });
                });
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Status Section =====
        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Saved") || self.status.contains("Exported") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set the status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    Calculate,
    Save,
    ShowGraph,
    ExportPng,
    CopyResults,
    OpenSaved,
}
