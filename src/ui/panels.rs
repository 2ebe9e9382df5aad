use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::view_model::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – launch controls
// ---------------------------------------------------------------------------

/// Render the left control panel: site selector and payload range.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the bounds so we can mutate state below.
    let sites = dataset.sites.clone();
    let (min_payload, max_payload) = (dataset.min_payload, dataset.max_payload);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Launch site selector ----
            ui.strong("Launch site");
            egui::ComboBox::from_id_salt("site_selector")
                .selected_text(state.site.to_string())
                .show_ui(ui, |ui: &mut Ui| {
                    if ui
                        .selectable_label(state.site == SiteSelection::All, "All Sites")
                        .clicked()
                    {
                        state.site = SiteSelection::All;
                    }
                    for site in &sites {
                        let selected = state.site == SiteSelection::Site(site.clone());
                        if ui.selectable_label(selected, site).clicked() {
                            state.site = SiteSelection::Site(site.clone());
                        }
                    }
                });
            ui.separator();

            // ---- Payload range ----
            ui.strong("Payload range (kg)");

            let mut lo = state.payload_range.lo;
            if ui
                .add(Slider::new(&mut lo, min_payload..=max_payload).text("min"))
                .changed()
            {
                state.set_range_lo(lo);
            }

            let mut hi = state.payload_range.hi;
            if ui
                .add(Slider::new(&mut hi, min_payload..=max_payload).text("max"))
                .changed()
            {
                state.set_range_hi(hi);
            }

            if ui.small_button("Full range").clicked() {
                state.set_range_lo(min_payload);
                state.set_range_hi(max_payload);
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
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} launches loaded, {} in view",
                ds.len(),
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
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from {} sites (payload {} - {} kg)",
                    dataset.len(),
                    dataset.sites.len(),
                    dataset.min_payload,
                    dataset.max_payload
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
