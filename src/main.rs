use eframe::CreationContext;
use nullpaste::app::NullPaste;
use nullpaste::utils::logging;

fn main() -> eframe::Result<()> {
    logging::initialize();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "nullpaste",
        options,
        Box::new(|cc: &CreationContext| Box::new(NullPaste::new(cc))),
    )
}
