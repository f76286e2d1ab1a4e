//! Replay scripts: an initial host state plus the events to feed the engine.

use std::path::Path;

use serde::Deserialize;
use tinyhud_common::{ButtonEvent, CountChange, HostEvent, HudError, MenuEvent};
use tinyhud_engine::host::recording::{HostState, MenuFlags};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    pub host: HostState,
    pub events: Vec<ScriptStep>,
}

/// One scripted step. Everything except `SetMenuFlags` is a host event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ScriptStep {
    Input(Vec<ButtonEvent>),
    Menu(MenuEvent),
    InventoryCount(CountChange),
    Reload,
    /// Replace the host's menu flags, e.g. to open a blocking menu.
    SetMenuFlags(MenuFlags),
}

impl ScriptStep {
    /// The host event this step delivers, or `None` for host-state edits.
    pub fn host_event(&self) -> Option<HostEvent> {
        match self {
            ScriptStep::Input(events) => Some(HostEvent::Input(events.clone())),
            ScriptStep::Menu(menu) => Some(HostEvent::Menu(menu.clone())),
            ScriptStep::InventoryCount(change) => Some(HostEvent::InventoryCount(*change)),
            ScriptStep::Reload => Some(HostEvent::Reload),
            ScriptStep::SetMenuFlags(_) => None,
        }
    }
}

pub fn parse_script(json: &str) -> Result<Script, HudError> {
    serde_json::from_str(json).map_err(|e| HudError::Script(e.to_string()))
}

pub fn load_script(path: &Path) -> Result<Script, HudError> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| HudError::Script(format!("{}: {e}", path.display())))
}
