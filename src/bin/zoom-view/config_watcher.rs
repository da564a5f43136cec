//! Reloads the zoom config whenever its file changes on disk.

use eframe::egui;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use zoom_view::{ConfigError, ZoomConfig};

/// Watches a single config file and parses it again on every write.
pub struct ConfigWatcher {
    /// Receiver for reload results from the file watcher
    reload_rx: Receiver<Result<ZoomConfig, ConfigError>>,
    /// The watcher must be kept alive for events to fire
    _watcher: RecommendedWatcher,
}

impl ConfigWatcher {
    /// Starts watching `path`.
    ///
    /// Returns `None` if the file has no parent directory or watching fails.
    /// The parent directory is watched rather than the file itself, so editors
    /// that replace the file on save are still picked up.
    pub fn new(ctx: egui::Context, path: &Path) -> Option<Self> {
        let path = path.to_path_buf();
        let directory = path.parent()?.to_path_buf();
        let (reload_tx, reload_rx) = mpsc::channel();

        let watched = path.clone();
        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            let Ok(event) = res else {
                return;
            };
            if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
                return;
            }
            if !event.paths.iter().any(|p| is_same_file(p, &watched)) {
                return;
            }

            let result = ZoomConfig::load(&watched);
            match &result {
                Ok(_) => log::info!("Reloaded zoom config: {}", watched.display()),
                Err(err) => log::warn!("Zoom config reload failed: {err}"),
            }
            let _ = reload_tx.send(result);
            ctx.request_repaint();
        })
        .ok()?;

        watcher
            .watch(&directory, RecursiveMode::NonRecursive)
            .ok()?;

        log::info!("Watching zoom config: {}", path.display());

        Some(Self {
            reload_rx,
            _watcher: watcher,
        })
    }

    /// Returns the latest reload result since the previous poll, if any.
    pub fn poll(&mut self) -> Option<Result<ZoomConfig, ConfigError>> {
        let mut latest = None;
        loop {
            match self.reload_rx.try_recv() {
                Ok(result) => latest = Some(result),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Config watcher channel disconnected");
                    break;
                }
            }
        }
        latest
    }
}

fn is_same_file(candidate: &Path, watched: &Path) -> bool {
    candidate == watched || candidate.file_name() == watched.file_name()
}
