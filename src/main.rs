use anyhow::Context;
use eframe::NativeOptions;
use std::path::PathBuf;
use strevo::config::ConfigManager;
use strevo::engines::generation::{GenerationEngine, LogProgressCallback};
use strevo::ui::StrevoApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Optional config file path as the first argument; STREVO_* env vars override it.
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ConfigManager::load(config_path.as_deref())
        .context("failed to load configuration")?
        .get();

    let mut engine = GenerationEngine::new(&config.scheduler).context("failed to create engine")?;
    engine.set_callback(Box::new(LogProgressCallback));

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Strevo - Genetic String Evolution"),
        ..Default::default()
    };

    eframe::run_native(
        "Strevo",
        native_options,
        Box::new(move |cc| Ok(Box::new(StrevoApp::new(cc, &config, engine)))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))
}
