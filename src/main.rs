use eframe::NativeOptions;
use flowboard_ui::app::FlowboardApp;
use flowboard_ui::config::Config;
use flowboard_ui::logger;

fn main() -> eframe::Result {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    if let Err(err) = logger::init(&config.log_dir) {
        eprintln!("Logging disabled: {err:#}");
    }
    log::info!("🚀 Flowboard started");
    match config_error {
        Some(err) => log::warn!("Config ignored, using defaults: {err:#}"),
        None => log::info!("📁 Config loaded"),
    }

    let title = config.title.clone();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([240.0, 160.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(FlowboardApp::new(config)))),
    )
}
