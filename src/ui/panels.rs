use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use stadium_dashboard::config::{MAX_CAPACITY, MAX_YEAR, MIN_CAPACITY, MIN_YEAR};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.label("Choose Which Data to Display:");
    ui.separator();

    if state.table.is_none() {
        ui.label("No stadium table loaded.");
        return;
    }

    let options: Vec<String> = state.conferences.iter().cloned().collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Conference multi-select ----
            let header_text = format!(
                "Select a Conference  ({}/{})",
                state.criteria.conferences.len(),
                options.len()
            );
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("conferences")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_none();
                        }
                    });

                    for conference in &options {
                        let mut checked = state.criteria.conferences.contains(conference);
                        if ui.checkbox(&mut checked, conference.as_str()).changed() {
                            state.toggle_conference(conference);
                        }
                    }
                });
            ui.separator();

            // ---- Numeric thresholds ----
            ui.strong("Min Capacity");
            let capacity = ui.add(Slider::new(
                &mut state.criteria.min_capacity,
                MIN_CAPACITY..=MAX_CAPACITY,
            ));
            ui.add_space(4.0);

            ui.strong("All Stadiums Built After");
            let year = ui.add(Slider::new(&mut state.criteria.min_year, MIN_YEAR..=MAX_YEAR));

            if capacity.changed() || year.changed() {
                state.refresh();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.view.is_some(), egui::Button::new("Export charts…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(table), Some(path)) = (&state.table, &state.source_path) {
            ui.label(format!(
                "{}: {} stadiums loaded, {} shown",
                path.display(),
                table.len(),
                state.visible_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open stadium data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export chart specs")
        .set_file_name("stadium_charts.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        if let Err(e) = state.export_view(&path) {
            log::error!("Failed to export charts: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
