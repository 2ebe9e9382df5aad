use eframe::egui::{self, Color32, Mesh, Pos2, Sense, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::ColorMap;
use crate::data::view_model::{self, PieChart};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Success pie chart
// ---------------------------------------------------------------------------

/// Render the success pie chart for the current site selection.
pub fn success_pie(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let chart = view_model::pie_chart_data(dataset, &state.site);
    ui.strong(chart.title.as_str());

    let total: f64 = chart.slices.iter().map(|s| s.value).sum();
    if chart.slices.is_empty() || total <= 0.0 {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No launches for this selection.");
        });
        return;
    }

    let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
    let colors = ColorMap::new(&labels);

    ui.horizontal(|ui: &mut Ui| {
        draw_pie(ui, &chart, total, &colors);

        // ---- Legend ----
        ui.vertical(|ui: &mut Ui| {
            for slice in &chart.slices {
                ui.horizontal(|ui: &mut Ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
                    ui.painter()
                        .rect_filled(swatch, 2.0, colors.color_for(&slice.label));
                    ui.label(format!("{} ({})", slice.label, slice.value));
                });
            }
        });
    });
}

/// Paint the pie as one triangle-fan mesh per slice.
fn draw_pie(ui: &mut Ui, chart: &PieChart, total: f64, colors: &ColorMap) {
    let side = ui.available_height().min(ui.available_width() * 0.6).max(80.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), Sense::hover());
    let painter = ui.painter_at(rect);

    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.5 - 2.0;

    // Start at 12 o'clock, sweep clockwise.
    let mut angle = -std::f32::consts::FRAC_PI_2;
    for slice in &chart.slices {
        let sweep = (slice.value / total) as f32 * std::f32::consts::TAU;
        if sweep <= 0.0 {
            continue;
        }
        let color = colors.color_for(&slice.label);
        painter.add(wedge_mesh(center, radius, angle, sweep, color));
        angle += sweep;
    }

    painter.circle_stroke(center, radius, Stroke::new(1.0, Color32::DARK_GRAY));
}

/// Build a filled circular wedge as a triangle fan around `center`.
fn wedge_mesh(center: Pos2, radius: f32, start: f32, sweep: f32, color: Color32) -> Mesh {
    // One arc segment per ~4 degrees keeps the outline smooth.
    let segments = ((sweep / 0.07).ceil() as usize).max(1);

    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, color);
    for i in 0..=segments {
        let a = start + sweep * (i as f32 / segments as f32);
        mesh.colored_vertex(
            Pos2::new(center.x + radius * a.cos(), center.y + radius * a.sin()),
            color,
        );
    }
    for i in 0..segments as u32 {
        mesh.add_triangle(0, i + 1, i + 2);
    }
    mesh
}

// ---------------------------------------------------------------------------
// Payload / outcome scatter chart
// ---------------------------------------------------------------------------

/// Render the payload-vs-outcome scatter chart for the current controls.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let chart = view_model::scatter_chart_data(dataset, &state.site, state.payload_range);
    ui.strong(chart.title.as_str());

    // Group points by booster category so each category becomes one
    // legend entry with its own colour.
    let mut categories: Vec<&str> = Vec::new();
    for p in &chart.points {
        if !categories.contains(&p.booster_category.as_str()) {
            categories.push(&p.booster_category);
        }
    }
    let colors = ColorMap::new(&categories);

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("class")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for category in &categories {
                let points: PlotPoints = chart
                    .points
                    .iter()
                    .filter(|p| p.booster_category == *category)
                    .map(|p| [p.payload_mass_kg, p.outcome.as_flag() as f64])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(*category)
                        .color(colors.color_for(category))
                        .radius(4.0),
                );
            }
        });
}
