mod cli;
mod replay;
mod script;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tinyhud_common::{ConfigError, HudError};
use tinyhud_config::schema::TinyHudConfig;
use tinyhud_config::{toml_loader, ReloadManager};
use tinyhud_engine::HudEngine;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::replay::Replay;
use crate::script::Script;

fn init_logging(directive: &str) {
    let directive: Directive = directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<TinyHudConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => tinyhud_config::load_config(),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Settings are read before logging starts so their level can apply.
    let loaded = load_settings(args.config.as_ref());
    let directive = args.log_level.clone().unwrap_or_else(|| {
        let level = loaded
            .as_ref()
            .map(|c| c.logging.level.as_str())
            .unwrap_or("info");
        format!("tinyhud={level}")
    });
    init_logging(&directive);

    tracing::info!("tinyhud v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("settings load failed, using defaults: {e}");
        TinyHudConfig::default()
    });

    if args.print_config {
        println!("{}", tinyhud_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    match run(&args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args, config: TinyHudConfig) -> Result<(), HudError> {
    let script = match &args.script {
        Some(path) => script::load_script(path)?,
        None => Script::default(),
    };
    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => toml_loader::default_config_path().ok(),
    };

    if args.watch {
        let path = config_path
            .ok_or_else(|| HudError::Other("--watch needs a settings file".into()))?;
        let runtime = tokio::runtime::Runtime::new()?;
        return runtime.block_on(watch(path, script));
    }

    let mut engine = HudEngine::new(config);
    if let Some(path) = config_path {
        engine = engine.with_config_path(path);
    }
    let mut replay = Replay::new(engine, script.host, io::stdout().lock());
    replay.start()?;
    for step in &script.events {
        replay.step(step)?;
    }
    tracing::info!("replayed {} events", script.events.len());
    Ok(())
}

/// Replay the script, then rebuild the layout on every settings change
/// until Ctrl-C.
async fn watch(path: PathBuf, script: Script) -> Result<(), HudError> {
    let (config, mut rx) = ReloadManager::start(path.clone()).await;
    let engine = HudEngine::new(config).with_config_path(path);
    let mut replay = Replay::new(engine, script.host, io::stdout());
    replay.start()?;
    for step in &script.events {
        replay.step(step)?;
    }

    tracing::info!("watching settings, Ctrl-C to stop");
    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    tracing::info!("reload manager stopped");
                    break;
                }
                let config = rx.borrow_and_update().clone();
                replay.reload(config)?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }
    Ok(())
}
