//! SVG pie charts
//!
//! Draws each panel as a pie with a legend underneath. Slices are polygons
//! approximating the arc, which keeps the path data to move/line commands.

use std::f64::consts::PI;

use svg::node::element::path::Data;
use svg::node::element::{Group, Path, Rectangle, Text};
use svg::node::Text as TextNode;
use svg::Document;

use crate::display::format::{format_percentage, truncate};
use crate::error::{TrackerError, TrackerResult};
use crate::reports::aggregate::sorted_by_amount;

use super::{ChartPanel, ChartRenderer, RenderedChart};

const COLORS: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

const TITLE_BASELINE: f64 = 36.0;
const PIE_TOP: f64 = 60.0;
const LEGEND_GAP: f64 = 36.0;
const LEGEND_ROW: f64 = 22.0;
const BOTTOM_MARGIN: f64 = 20.0;
/// Slices smaller than this share get no in-slice percentage label
const MIN_LABELLED_SHARE: f64 = 4.0;

/// Renders panels as side-by-side SVG pie charts
#[derive(Debug, Clone)]
pub struct SvgPieRenderer {
    panel_width: f64,
    radius: f64,
}

impl Default for SvgPieRenderer {
    fn default() -> Self {
        Self {
            panel_width: 520.0,
            radius: 170.0,
        }
    }
}

impl SvgPieRenderer {
    fn panel_height(&self, panel: &ChartPanel) -> f64 {
        let rows = slices(panel).len().max(2) as f64;
        PIE_TOP + 2.0 * self.radius + LEGEND_GAP + rows * LEGEND_ROW + BOTTOM_MARGIN
    }

    fn draw_panel(&self, panel: &ChartPanel) -> Group {
        let center_x = self.panel_width / 2.0;
        let center_y = PIE_TOP + self.radius;

        let mut group = Group::new().add(
            label(&panel.title, center_x, TITLE_BASELINE)
                .set("font-size", 20)
                .set("font-weight", "bold")
                .set("text-anchor", "middle"),
        );

        let slices = slices(panel);
        let total: f64 = slices.iter().map(|(_, v)| v).sum();

        if slices.is_empty() || total <= 0.0 {
            for (i, line) in panel.empty_note.lines().enumerate() {
                group = group.add(
                    label(line, center_x, center_y + i as f64 * LEGEND_ROW)
                        .set("font-size", 18)
                        .set("text-anchor", "middle"),
                );
            }
            return group;
        }

        let mut start = -PI / 2.0;
        for (i, (name, value)) in slices.iter().enumerate() {
            let share = value / total * 100.0;
            let sweep = value / total * 2.0 * PI;
            let color = COLORS[i % COLORS.len()];

            group = group.add(
                Path::new()
                    .set("fill", color)
                    .set("stroke", "white")
                    .set("stroke-width", 1)
                    .set("d", slice_path(center_x, center_y, self.radius, start, sweep)),
            );

            if share >= MIN_LABELLED_SHARE {
                let middle = start + sweep / 2.0;
                let distance = self.radius * 0.65;
                group = group.add(
                    label(
                        &format_percentage(share),
                        center_x + distance * middle.cos(),
                        center_y + distance * middle.sin(),
                    )
                    .set("font-size", 14)
                    .set("text-anchor", "middle"),
                );
            }

            let row_y = center_y + self.radius + LEGEND_GAP + i as f64 * LEGEND_ROW;
            group = group
                .add(
                    Rectangle::new()
                        .set("x", 40)
                        .set("y", row_y - 12.0)
                        .set("width", 14)
                        .set("height", 14)
                        .set("fill", color),
                )
                .add(
                    label(
                        &format!("{} ({})", truncate(name, 32), format_percentage(share)),
                        62.0,
                        row_y,
                    )
                    .set("font-size", 14),
                );

            start += sweep;
        }

        group
    }
}

impl ChartRenderer for SvgPieRenderer {
    fn render(&self, panels: &[ChartPanel]) -> TrackerResult<RenderedChart> {
        if panels.is_empty() {
            return Err(TrackerError::Render("No chart panels to render".into()));
        }

        let width = self.panel_width * panels.len() as f64;
        let height = panels
            .iter()
            .map(|p| self.panel_height(p))
            .fold(0.0, f64::max);

        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, width, height))
            .set("width", width)
            .set("height", height)
            .set("font-family", "sans-serif")
            .add(
                Rectangle::new()
                    .set("width", width)
                    .set("height", height)
                    .set("fill", "white"),
            );

        for (i, panel) in panels.iter().enumerate() {
            document = document.add(
                self.draw_panel(panel)
                    .set("transform", format!("translate({},0)", i as f64 * self.panel_width)),
            );
        }

        Ok(RenderedChart {
            bytes: document.to_string().into_bytes(),
            media_type: "image/svg+xml",
            extension: "svg",
        })
    }
}

/// Positive entries of a panel, largest first
fn slices(panel: &ChartPanel) -> Vec<(&str, f64)> {
    sorted_by_amount(&panel.grouping)
        .into_iter()
        .filter(|(_, amount)| amount.is_positive())
        .map(|(name, amount)| (name, amount.as_f64()))
        .collect()
}

fn slice_path(cx: f64, cy: f64, radius: f64, start: f64, sweep: f64) -> Data {
    // one vertex every two degrees
    let steps = ((sweep / (PI / 90.0)).ceil() as usize).max(1);
    let mut data = Data::new().move_to((cx, cy));
    for step in 0..=steps {
        let angle = start + sweep * step as f64 / steps as f64;
        data = data.line_to((cx + radius * angle.cos(), cy + radius * angle.sin()));
    }
    data.close()
}

fn label(content: &str, x: f64, y: f64) -> Text {
    Text::new()
        .set("x", x)
        .set("y", y)
        .add(TextNode::new(escape_xml(content)))
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
