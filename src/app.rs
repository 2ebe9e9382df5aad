use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above, scatter below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a launch records file to begin  (File → Open…)");
                });
                return;
            }

            let pie_height = ui.available_height() * 0.45;
            ui.allocate_ui(egui::vec2(ui.available_width(), pie_height), |ui| {
                charts::success_pie(ui, &self.state);
            });
            ui.separator();
            charts::payload_scatter(ui, &self.state);
        });
    }
}
