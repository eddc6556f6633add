use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

mod config;
mod controller;
mod timer_bridge;
mod ui;

use controller::events::UiEvent;
use timer_bridge::commands::TimerCommand;
use ui::ShowcaseApp;

#[derive(Parser, Debug)]
struct Args {
    /// Path to a showcase.toml overriding the default window and content.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref());

    let (cmd_tx, cmd_rx) = bounded::<TimerCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    let app_name = settings.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |_cc| {
            timer_bridge::launch(cmd_rx, ui_tx);
            Ok(Box::new(ShowcaseApp::new(settings, cmd_tx, ui_rx)))
        }),
    )
}
