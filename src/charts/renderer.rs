//! Chart Renderer
//! Pure pixel-space geometry for the voltage/current chart.
//!
//! Produces a list of drawing commands; the GUI executes them with egui's
//! painter, so the layout math stays testable without a window.

/// Margin reserved on every side for axes and labels, in pixels.
pub const MARGIN: f32 = 50.0;
/// Gridline and tick divisions per axis.
pub const DIVISIONS: usize = 10;
/// Data marker radius, in pixels.
pub const MARKER_RADIUS: f32 = 5.0;

/// One drawing command, in pixel coordinates (origin top-left, Y down).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Axis { from: (f32, f32), to: (f32, f32) },
    GridLine { from: (f32, f32), to: (f32, f32) },
    Tick { from: (f32, f32), to: (f32, f32) },
    TickLabel { pos: (f32, f32), text: String },
    AxisCaption { pos: (f32, f32), text: String },
    Marker { center: (f32, f32) },
    PointLabel { pos: (f32, f32), text: String },
    Segment { from: (f32, f32), to: (f32, f32) },
}

/// Lays out the scatter/line chart for a set of recorded samples.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Largest value of the list, defaulting to 1 so the scale stays
    /// positive and finite while the session is empty.
    pub(crate) fn max_or_one(values: &[f64]) -> f64 {
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if max > 0.0 {
            max
        } else {
            1.0
        }
    }

    /// Build the command list for a chart of the given pixel size.
    ///
    /// Axes sit on the left and bottom margins with the origin at the
    /// bottom-left; sample `i` maps to
    /// `x = MARGIN + (voltage/max_voltage) * plot_width`,
    /// `y = (height - MARGIN) - (current/max_current) * plot_height`.
    /// Consecutive points are connected in list order. Empty input yields
    /// only the axes, grid, and tick labels.
    pub fn render(voltages: &[f64], currents: &[f64], width: f32, height: f32) -> Vec<DrawCmd> {
        let mut cmds = Vec::new();
        let plot_w = width - 2.0 * MARGIN;
        let plot_h = height - 2.0 * MARGIN;

        // Axes
        cmds.push(DrawCmd::Axis {
            from: (MARGIN, height - MARGIN),
            to: (width - MARGIN, height - MARGIN),
        });
        cmds.push(DrawCmd::Axis {
            from: (MARGIN, height - MARGIN),
            to: (MARGIN, MARGIN),
        });

        cmds.push(DrawCmd::AxisCaption {
            pos: (width - 80.0, height - 20.0),
            text: "Voltage (V)".to_string(),
        });
        cmds.push(DrawCmd::AxisCaption {
            pos: (20.0, MARGIN),
            text: "Current (A)".to_string(),
        });

        let max_voltage = Self::max_or_one(voltages);
        let max_current = Self::max_or_one(currents);

        let tick_dx = plot_w / DIVISIONS as f32;
        let tick_dy = plot_h / DIVISIONS as f32;

        // Grid lines across the plot area
        for i in 1..=DIVISIONS {
            let x = MARGIN + i as f32 * tick_dx;
            cmds.push(DrawCmd::GridLine {
                from: (x, height - MARGIN),
                to: (x, MARGIN),
            });
        }
        for i in 1..=DIVISIONS {
            let y = height - MARGIN - i as f32 * tick_dy;
            cmds.push(DrawCmd::GridLine {
                from: (MARGIN, y),
                to: (width - MARGIN, y),
            });
        }

        // Ticks and labels on the X axis
        for i in 0..=DIVISIONS {
            let x = MARGIN + i as f32 * tick_dx;
            cmds.push(DrawCmd::Tick {
                from: (x, height - MARGIN),
                to: (x, height - MARGIN + 5.0),
            });
            cmds.push(DrawCmd::TickLabel {
                pos: (x - 10.0, height - 30.0),
                text: format!("{:.1}", i as f64 * (max_voltage / DIVISIONS as f64)),
            });
        }

        // Ticks and labels on the Y axis
        for i in 0..=DIVISIONS {
            let y = height - MARGIN - i as f32 * tick_dy;
            cmds.push(DrawCmd::Tick {
                from: (MARGIN, y),
                to: (MARGIN + 5.0, y),
            });
            cmds.push(DrawCmd::TickLabel {
                pos: (10.0, y + 5.0),
                text: format!("{:.1}", i as f64 * (max_current / DIVISIONS as f64)),
            });
        }

        // Data markers, value labels, and connecting segments in record order
        let mut prev: Option<(f32, f32)> = None;
        for (&voltage, &current) in voltages.iter().zip(currents) {
            let x = MARGIN + (voltage / max_voltage) as f32 * plot_w;
            let y = (height - MARGIN) - (current / max_current) as f32 * plot_h;

            cmds.push(DrawCmd::Marker { center: (x, y) });
            cmds.push(DrawCmd::PointLabel {
                pos: (x + 5.0, y - 5.0),
                text: format!("({voltage:?}, {current:?})"),
            });
            if let Some(from) = prev {
                cmds.push(DrawCmd::Segment { from, to: (x, y) });
            }
            prev = Some((x, y));
        }

        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(cmds: &[DrawCmd], pred: fn(&DrawCmd) -> bool) -> usize {
        cmds.iter().filter(|c| pred(c)).count()
    }

    fn markers(cmds: &[DrawCmd]) -> Vec<(f32, f32)> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Marker { center } => Some(*center),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_input_draws_frame_only() {
        let cmds = ChartRenderer::render(&[], &[], 500.0, 400.0);

        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::Marker { .. })), 0);
        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::PointLabel { .. })), 0);
        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::Segment { .. })), 0);

        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::Axis { .. })), 2);
        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::GridLine { .. })), 20);
        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::Tick { .. })), 22);
        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::TickLabel { .. })), 22);
        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::AxisCaption { .. })), 2);
    }

    #[test]
    fn empty_input_scales_against_one() {
        let cmds = ChartRenderer::render(&[], &[], 500.0, 400.0);

        let labels: Vec<&str> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::TickLabel { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();

        // Both axes run 0.0 .. 1.0 in tenths
        assert!(labels.contains(&"0.0"));
        assert!(labels.contains(&"0.5"));
        assert!(labels.contains(&"1.0"));
        assert!(labels.iter().all(|t| t.parse::<f64>().unwrap().is_finite()));
    }

    #[test]
    fn single_sample_maps_to_plot_corner() {
        // max values equal the sample, so it lands at the far corner of the
        // plot area: x = 50 + 400, y = 350 - 300
        let cmds = ChartRenderer::render(&[500.0], &[50.0], 500.0, 400.0);

        assert_eq!(markers(&cmds), vec![(450.0, 50.0)]);
        assert_eq!(count(&cmds, |c| matches!(c, DrawCmd::Segment { .. })), 0);
    }

    #[test]
    fn markers_stay_inside_the_plot_area() {
        let voltages = [0.0, 120.0, 500.0, 333.0];
        let currents = [0.0, 24.0, 50.0, 6.66];
        let cmds = ChartRenderer::render(&voltages, &currents, 500.0, 400.0);

        for (x, y) in markers(&cmds) {
            assert!((MARGIN..=500.0 - MARGIN).contains(&x));
            assert!((MARGIN..=400.0 - MARGIN).contains(&y));
        }
    }

    #[test]
    fn consecutive_samples_are_linked_in_order() {
        let cmds = ChartRenderer::render(&[10.0, 20.0, 5.0], &[2.0, 4.0, 1.0], 500.0, 400.0);

        let segments: Vec<((f32, f32), (f32, f32))> = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Segment { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect();

        let points = markers(&cmds);
        assert_eq!(points.len(), 3);
        assert_eq!(segments, vec![(points[0], points[1]), (points[1], points[2])]);
    }

    #[test]
    fn point_labels_carry_raw_values() {
        let cmds = ChartRenderer::render(&[10.0], &[2.0], 500.0, 400.0);

        let label = cmds.iter().find_map(|c| match c {
            DrawCmd::PointLabel { text, .. } => Some(text.clone()),
            _ => None,
        });
        assert_eq!(label.as_deref(), Some("(10.0, 2.0)"));
    }
}
