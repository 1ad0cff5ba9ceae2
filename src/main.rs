//! Isolation GUI
//!
//! Play against the engine or another player. An optional first argument
//! names a TOML config file.

use isolation::ui::IsolationApp;
use isolation::EngineConfig;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(&path).unwrap_or_else(|e| {
            log::error!("{e}; using defaults");
            EngineConfig::default()
        }),
        None => EngineConfig::default(),
    };
    log::info!(
        "{:?} with {} heuristic, {}ms per move",
        config.search.algorithm,
        config.search.heuristic,
        config.search.time_limit_ms
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Isolation"),
        ..Default::default()
    };

    eframe::run_native(
        "Isolation",
        options,
        Box::new(|cc| Ok(Box::new(IsolationApp::new(cc, config)))),
    )
}
