#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod colors;
mod config_watcher;
mod constants;
mod pattern;
mod ui;

use clap::Parser;
use config_watcher::ConfigWatcher;
use constants::{DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, SNAPSHOT_KEY};
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use pattern::generate_checkerboard;
use std::path::PathBuf;
use zoom_view::{ConfigError, Size, ZoomConfig, ZoomSnapshot, ZoomTransformController};

#[derive(Debug, Parser)]
#[command(
    name = "zoom-view",
    version,
    about = "Pinch, pan and double-tap zoom over a generated test bitmap"
)]
struct Cli {
    /// Zoom config in RON format [default: <config dir>/zoom-view/config.ron, if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Width of the generated bitmap in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_IMAGE_WIDTH)]
    width: u32,

    /// Height of the generated bitmap in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_IMAGE_HEIGHT)]
    height: u32,

    /// Ignore the zoom level persisted by the previous session
    #[arg(long)]
    fresh: bool,
}

/// Main application state for the zoom viewer.
pub struct ZoomViewApp {
    controller: ZoomTransformController,
    texture: Option<TextureHandle>,
    toasts: Toasts,
    config_watcher: Option<ConfigWatcher>,
}

impl ZoomViewApp {
    fn new(cc: &eframe::CreationContext<'_>, cli: Cli) -> Self {
        let mut toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let config_path = cli.config.clone().or_else(default_config_path);
        let config = match load_config(config_path.as_deref()) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                show_error(&mut toasts, err.to_string());
                ZoomConfig::default()
            }
        };

        let persisted = if cli.fresh {
            None
        } else {
            cc.storage
                .and_then(|storage| eframe::get_value::<ZoomSnapshot>(storage, SNAPSHOT_KEY))
        };
        let mut controller = match persisted {
            Some(snapshot) => {
                log::info!("Restoring zoom state {snapshot:?}");
                ZoomTransformController::restore(config, snapshot)
            }
            None => ZoomTransformController::new(config),
        };

        let texture = match generate_checkerboard(cli.width, cli.height) {
            Ok(image) => {
                controller.set_image_size(Size::new(image.width as f32, image.height as f32));
                let color_image = ColorImage::from_rgba_unmultiplied(
                    [image.width as usize, image.height as usize],
                    &image.pixels,
                );
                Some(
                    cc.egui_ctx
                        .load_texture("checkerboard", color_image, TextureOptions::LINEAR),
                )
            }
            Err(err) => {
                log::error!("{err}");
                show_error(&mut toasts, err.to_string());
                None
            }
        };

        let config_watcher = config_path
            .filter(|path| path.exists())
            .and_then(|path| ConfigWatcher::new(cc.egui_ctx.clone(), &path));

        if config_watcher.is_none() {
            log::info!("No config file watched - live reload disabled");
        }

        Self {
            controller,
            texture,
            toasts,
            config_watcher,
        }
    }

    /// Applies a reloaded config, or reports why it was rejected.
    fn poll_config(&mut self) {
        let Some(result) = self.config_watcher.as_mut().and_then(|w| w.poll()) else {
            return;
        };
        match result {
            Ok(config) => {
                self.controller.reconfigure(config);
                self.toasts.add(Toast {
                    kind: ToastKind::Info,
                    text: "Zoom config reloaded".into(),
                    options: ToastOptions::default()
                        .duration_in_seconds(3.0)
                        .show_icon(true),
                    ..Default::default()
                });
            }
            Err(err) => show_error(&mut self.toasts, err.to_string()),
        }
    }
}

impl eframe::App for ZoomViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_config();
        self.handle_keyboard_input(ctx);

        self.show_status_bar(ctx);
        self.show_central_panel(ctx);

        self.toasts.show(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SNAPSHOT_KEY, &self.controller.snapshot());
    }
}

fn default_config_path() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("zoom-view").join("config.ron");
    path.exists().then_some(path)
}

fn load_config(path: Option<&std::path::Path>) -> Result<ZoomConfig, ConfigError> {
    match path {
        Some(path) => ZoomConfig::load(path),
        None => Ok(ZoomConfig::default()),
    }
}

fn show_error(toasts: &mut Toasts, text: String) {
    toasts.add(Toast {
        kind: ToastKind::Error,
        text: text.into(),
        options: ToastOptions::default()
            .duration_in_seconds(10.0)
            .show_icon(true),
        ..Default::default()
    });
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Zoom View"),
        ..Default::default()
    };

    eframe::run_native(
        "Zoom View",
        options,
        Box::new(|cc| Ok(Box::new(ZoomViewApp::new(cc, cli)))),
    )
}
