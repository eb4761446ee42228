use anyhow::anyhow;
use eframe::egui;
use orrery::OrreryApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Orrery")
            .with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Orrery",
        options,
        Box::new(|cc| Ok(Box::new(OrreryApp::new(cc)))),
    )
    .map_err(|e| anyhow!("Viewer exited with an error: {e}"))?;

    log::info!("Viewer closed");
    Ok(())
}
