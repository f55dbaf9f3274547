//! Graph Window
//! Floating chart window with the classic painter-drawn view and an
//! interactive egui_plot view.

use crate::charts::{ChartPlotter, ChartRenderer, DrawCmd, MARKER_RADIUS, SERIES_COLOR};
use crate::session::Session;
use egui::{Align2, FontId, Pos2, Sense, Stroke, Vec2};

/// Which rendering of the chart is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GraphView {
    Classic,
    Interactive,
}

/// Floating voltage/current chart window.
pub struct GraphWindow {
    pub open: bool,
    view: GraphView,
}

impl Default for GraphWindow {
    fn default() -> Self {
        Self {
            open: false,
            view: GraphView::Classic,
        }
    }
}

impl GraphWindow {
    pub fn show(&mut self, ctx: &egui::Context, session: &Session) {
        let mut open = self.open;
        egui::Window::new("Voltage vs Current")
            .open(&mut open)
            .default_size([500.0, 400.0])
            .min_size([320.0, 260.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.view, GraphView::Classic, "Classic");
                    ui.selectable_value(&mut self.view, GraphView::Interactive, "Interactive");
                });
                ui.separator();

                match self.view {
                    GraphView::Classic => Self::draw_classic(ui, session),
                    GraphView::Interactive => ChartPlotter::draw_vi_chart(ui, session),
                }
            });
        self.open = open;
    }

    /// Execute the renderer's command list with egui's painter.
    fn draw_classic(ui: &mut egui::Ui, session: &Session) {
        let size = ui.available_size().max(Vec2::new(300.0, 240.0));
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let origin = response.rect.min;
        let at = |p: (f32, f32)| Pos2::new(origin.x + p.0, origin.y + p.1);

        let axis_color = ui.visuals().text_color();
        let grid_color = ui.visuals().weak_text_color();

        let cmds = ChartRenderer::render(
            &session.voltages(),
            &session.currents(),
            response.rect.width(),
            response.rect.height(),
        );

        for cmd in &cmds {
            match cmd {
                DrawCmd::Axis { from, to } => {
                    painter.line_segment([at(*from), at(*to)], Stroke::new(1.5, axis_color));
                }
                DrawCmd::GridLine { from, to } => {
                    painter.line_segment([at(*from), at(*to)], Stroke::new(0.5, grid_color));
                }
                DrawCmd::Tick { from, to } => {
                    painter.line_segment([at(*from), at(*to)], Stroke::new(1.0, axis_color));
                }
                DrawCmd::TickLabel { pos, text } => {
                    painter.text(
                        at(*pos),
                        Align2::LEFT_TOP,
                        text,
                        FontId::proportional(10.0),
                        axis_color,
                    );
                }
                DrawCmd::AxisCaption { pos, text } => {
                    painter.text(
                        at(*pos),
                        Align2::LEFT_TOP,
                        text,
                        FontId::proportional(12.0),
                        axis_color,
                    );
                }
                DrawCmd::Marker { center } => {
                    painter.circle_filled(at(*center), MARKER_RADIUS, SERIES_COLOR);
                }
                DrawCmd::PointLabel { pos, text } => {
                    painter.text(
                        at(*pos),
                        Align2::LEFT_BOTTOM,
                        text,
                        FontId::proportional(10.0),
                        SERIES_COLOR,
                    );
                }
                DrawCmd::Segment { from, to } => {
                    painter.line_segment([at(*from), at(*to)], Stroke::new(1.5, SERIES_COLOR));
                }
            }
        }
    }
}
