use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, ScrollArea, Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{BarChart, Plot, PlotPoints, Points};

use stadium_dashboard::charts::{BarSpec, MapPoint, MapSpec, PieSpec};
use stadium_dashboard::color::to_color32;

use crate::state::AppState;

/// Hover distance, in degrees, within which the map names a stadium.
const HOVER_RADIUS_DEG: f64 = 1.0;

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the title, banner, and (when enough stadiums match) the charts.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("College Football Stadium Visualization");
            ui.label("Welcome to College Football Stadium Database, use the sidebar to begin!");

            let logo = &state.config.logo_path;
            if logo.is_file() {
                ui.add(
                    egui::Image::new(format!("file://{}", logo.display()))
                        .max_width(ui.available_width() * 0.6)
                        .max_height(180.0),
                );
            }
            ui.add_space(8.0);

            let Some(view) = &state.view else {
                if state.table.is_some() {
                    ui.label("Select conferences so that at least two stadiums match.");
                }
                return;
            };

            ui.label("View a Map of Stadiums");
            stadium_map(ui, &view.map);
            ui.add_space(12.0);

            ui.label(
                "Here is a Pie Chart displaying what percentage each selected conference is \
                 that meets the criteria:",
            );
            pie_chart(ui, &view.pie);
            ui.add_space(12.0);

            ui.label("Here is a Bar Chart displaying average capacities for each conference:");
            capacity_bars(ui, &view.bar);
        });
}

// ---------------------------------------------------------------------------
// Map
// ---------------------------------------------------------------------------

fn stadium_map(ui: &mut Ui, map: &MapSpec) {
    let points: PlotPoints = map.points.iter().map(MapPoint::position).collect();
    let hover_points = map.points.clone();

    // Roughly the span a web map shows at this zoom level.
    let half_span = 180.0 / 2f64.powf(map.view.zoom);

    Plot::new("stadium_map")
        .height(360.0)
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .include_x(map.view.longitude - half_span)
        .include_x(map.view.longitude + half_span)
        .include_y(map.view.latitude - half_span / 2.0)
        .include_y(map.view.latitude + half_span / 2.0)
        .label_formatter(move |_name, value| {
            nearest(&hover_points, value.x, value.y)
                .map(MapPoint::tooltip)
                .unwrap_or_else(|| format!("{:.2}, {:.2}", value.y, value.x))
        })
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(points)
                    .name("Stadiums")
                    .radius(5.0)
                    .color(to_color32(map.color)),
            );
        });
}

fn nearest(points: &[MapPoint], x: f64, y: f64) -> Option<&MapPoint> {
    points
        .iter()
        .map(|p| {
            let d = (p.longitude - x).powi(2) + (p.latitude - y).powi(2);
            (d, p)
        })
        .filter(|(d, _)| *d <= HOVER_RADIUS_DEG * HOVER_RADIUS_DEG)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, p)| p)
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, pie: &PieSpec) {
    ui.strong(&pie.title);

    let size = Vec2::new(ui.available_width().min(480.0), 320.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = rect.width().min(rect.height()) * 0.38;
    let text_color = ui.visuals().text_color();

    let mut start = -FRAC_PI_2;
    for slice in &pie.slices {
        let sweep = slice.fraction as f32 * TAU;
        if sweep <= 0.0 {
            continue;
        }
        let dir = Vec2::angled(start + sweep / 2.0);
        let origin = if slice.explode {
            center + dir * radius * pie.explode_offset as f32
        } else {
            center
        };

        // Fan of thin triangles so large slices stay convex.
        let steps = ((sweep / TAU) * 96.0).ceil().max(1.0) as usize;
        let fill = to_color32(slice.color);
        for i in 0..steps {
            let a0 = start + sweep * i as f32 / steps as f32;
            let a1 = start + sweep * (i + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![
                    origin,
                    origin + Vec2::angled(a0) * radius,
                    origin + Vec2::angled(a1) * radius,
                ],
                fill,
                Stroke::NONE,
            ));
        }

        painter.text(
            origin + dir * radius * 0.6,
            Align2::CENTER_CENTER,
            &slice.percent_label,
            FontId::proportional(12.0),
            Color32::BLACK,
        );
        painter.text(
            origin + dir * radius * 1.18,
            Align2::CENTER_CENTER,
            &slice.label,
            FontId::proportional(13.0),
            text_color,
        );
        start += sweep;
    }
}

// ---------------------------------------------------------------------------
// Bar chart
// ---------------------------------------------------------------------------

fn capacity_bars(ui: &mut Ui, spec: &BarSpec) {
    ui.strong(&spec.title);

    let fill = to_color32(spec.color);
    let bars: Vec<egui_plot::Bar> = spec
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            egui_plot::Bar::new(i as f64, bar.value)
                .name(&bar.label)
                .width(0.6)
                .fill(fill)
        })
        .collect();
    let labels: Vec<String> = spec.bars.iter().map(|b| b.label.clone()).collect();

    Plot::new("capacity_bars")
        .height(320.0)
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone())
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Average capacity"));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(stadium: &str, longitude: f64, latitude: f64) -> MapPoint {
        MapPoint {
            stadium: stadium.into(),
            conference: "SEC".into(),
            capacity: 90_000,
            longitude,
            latitude,
        }
    }

    #[test]
    fn nearest_picks_the_closest_stadium_within_reach() {
        let points = vec![point("near", -85.0, 33.0), point("far", -84.5, 33.5)];
        assert_eq!(nearest(&points, -85.1, 33.1).unwrap().stadium, "near");
        assert!(nearest(&points, -70.0, 40.0).is_none());
    }
}
