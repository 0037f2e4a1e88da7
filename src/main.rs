mod app;
use exquizzite::*;

use app::FlashcardApp;
use settings::PreferencesStore;
use sound::SoundBoard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exquizzite=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let prefs_store = PreferencesStore::default();
    let sounds = SoundBoard::default();
    tracing::info!(
        "Settings file: {}, sounds: {}",
        prefs_store.path().display(),
        sounds.dir().display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 500.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcard App",
        options,
        Box::new(|cc| {
            app::configure_fonts(&cc.egui_ctx);
            Ok(Box::new(FlashcardApp::new(prefs_store, sounds)))
        }),
    )
}
