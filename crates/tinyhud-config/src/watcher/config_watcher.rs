//! Settings file watcher.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::time::Duration;
use tinyhud_common::ConfigError;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watches a settings file and signals when it changes.
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(
                "settings file {} does not exist yet, will watch for creation",
                path.display()
            );
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Watch the file until the notify channel closes, sending `()` on `tx`
    /// once per debounced burst of modify/create events.
    ///
    /// The parent directory is watched so atomic saves (write + rename)
    /// are seen.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        let watch_path = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("starting settings watcher for {}", self.path.display());

        let (notify_tx, mut notify_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                        return;
                    }
                    let is_ours = event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(|n| n == file_name).unwrap_or(false));
                    if is_ours {
                        debug!("settings file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_path, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_path.display()))
            })?;

        loop {
            if notify_rx.recv().await.is_none() {
                break;
            }

            // Coalesce everything that arrives inside the debounce window.
            let debounce = tokio::time::sleep(DEBOUNCE);
            tokio::pin!(debounce);
            loop {
                tokio::select! {
                    _ = &mut debounce => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("settings file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for settings reload signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}
