mod app;
mod state;
mod ui;

use app::StadiumDashboardApp;
use eframe::egui;
use stadium_dashboard::config::DashboardConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();
    log::info!(
        "Starting with data {} and logo {}",
        config.data_path.display(),
        config.logo_path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "College Football Stadium Visualization",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the banner png/jpg.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(StadiumDashboardApp::new(config)))
        }),
    )
}
