//! Drives a [`HudEngine`] with a [`RecordingHost`] and prints every host
//! request as one JSON line.

use std::io::Write;

use tinyhud_common::HudError;
use tinyhud_config::TinyHudConfig;
use tinyhud_engine::host::recording::{HostState, RecordingHost};
use tinyhud_engine::HudEngine;
use tracing::{debug, warn};

use crate::script::ScriptStep;

pub struct Replay<W: Write> {
    engine: HudEngine,
    host: RecordingHost,
    out: W,
}

impl<W: Write> Replay<W> {
    pub fn new(engine: HudEngine, state: HostState, out: W) -> Self {
        Self {
            engine,
            host: RecordingHost::new(state),
            out,
        }
    }

    /// Sync the actor with the HUD's active hands.
    pub fn start(&mut self) -> Result<(), HudError> {
        let outcomes = self.engine.start(&mut self.host);
        debug!("start: {outcomes:?}");
        self.settle()
    }

    pub fn step(&mut self, step: &ScriptStep) -> Result<(), HudError> {
        if let ScriptStep::SetMenuFlags(flags) = step {
            debug!("menu flags set to {flags:?}");
            self.host.state.menus = flags.clone();
            return Ok(());
        }
        let Some(event) = step.host_event() else {
            return Ok(());
        };
        match self.engine.handle_event(&mut self.host, &event) {
            Ok(outcome) => debug!("{outcome:?}"),
            Err(e) => warn!("event failed, layout unchanged: {e}"),
        }
        self.settle()
    }

    /// Apply settings published by the reload manager.
    pub fn reload(&mut self, config: TinyHudConfig) -> Result<(), HudError> {
        let outcomes = self.engine.reload(&mut self.host, config);
        debug!("reload: {outcomes:?}");
        self.settle()
    }

    pub fn engine(&self) -> &HudEngine {
        &self.engine
    }

    pub fn host(&self) -> &RecordingHost {
        &self.host
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Feed count changes caused by the last requests back into the
    /// engine, then print the requests.
    fn settle(&mut self) -> Result<(), HudError> {
        for change in self.host.drain_count_changes() {
            self.engine.on_count_changed(change);
        }
        for command in self.host.drain_commands() {
            let line = serde_json::to_string(&command)
                .map_err(|e| HudError::Other(format!("failed to encode {}: {e}", command.label())))?;
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
