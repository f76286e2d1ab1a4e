//! Core reload manager implementation.

use crate::schema::TinyHudConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use std::path::PathBuf;
use tinyhud_common::ConfigError;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live settings reloading.
///
/// Watches the settings file and publishes each valid new config on a
/// [`tokio::sync::watch`] channel. Consumers apply it between input turns.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from `config_path` and start watching it.
    ///
    /// Falls back to defaults when the file cannot be loaded. The watcher
    /// runs in a background task for as long as a receiver is alive.
    pub async fn start(config_path: PathBuf) -> (TinyHudConfig, watch::Receiver<TinyHudConfig>) {
        let initial_config = match toml_loader::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load settings: {e}, using defaults");
                TinyHudConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial_config.clone());

        tokio::spawn(async move {
            let manager = ReloadManager { config_path };
            manager.run_watch_loop(config_tx).await;
        });

        (initial_config, config_rx)
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<TinyHudConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create settings watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("settings watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading settings from {}", self.config_path.display());
                    match self.reload_config() {
                        Ok(config) => {
                            if config_tx.send(config).is_err() {
                                info!("all settings receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => warn!("settings reload failed: {e}"),
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("settings watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("settings watcher channel closed");
                    break;
                }
            }
        }
    }

    /// Re-read and validate. An invalid file is rejected so the running
    /// layout stays in place.
    fn reload_config(&self) -> Result<TinyHudConfig, ConfigError> {
        let config = toml_loader::load_from_path(&self.config_path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
