mod clipboard;
mod ui;

use eframe::egui;

use ui::ShowcaseApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Genius Swarm Showcase")
            .with_inner_size([1080.0, 720.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Genius Swarm Showcase",
        options,
        Box::new(|_cc| Ok(Box::new(ShowcaseApp::new()))),
    )
}
