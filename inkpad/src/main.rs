//! inkpad — a minimal borderless plain-text editor
//!
//! One window, no chrome: drag the title bar to move, the corner grip to
//! resize. File operations live on keyboard shortcuts (Ctrl+H lists them).

use eframe::NativeOptions;
use inkpad::app::InkPadApp;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 420.0])
            .with_min_inner_size([280.0, 200.0])
            .with_decorations(false)
            .with_resizable(true)
            .with_title("inkpad"),
        ..Default::default()
    };

    eframe::run_native(
        "inkpad",
        options,
        Box::new(|cc| {
            inkcore::InkTheme::default().apply(&cc.egui_ctx);
            Box::new(InkPadApp::new(cc))
        }),
    )
}
