mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::LaunchDashApp;
use eframe::egui;
use state::AppState;

const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = AppState::default();

    // Dataset path: first CLI argument, or the default file when present.
    // A file that fails to load aborts startup.
    let path: Option<PathBuf> = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| {
            let default = PathBuf::from(DEFAULT_DATASET);
            default.exists().then_some(default)
        });

    if let Some(path) = path {
        match data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from {}",
                    dataset.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                eprintln!("launch-dash: cannot load {}: {e:#}", path.display());
                std::process::exit(1);
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(state)))),
    )
}
