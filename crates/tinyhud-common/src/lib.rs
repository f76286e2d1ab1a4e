pub mod commands;
pub mod errors;
pub mod events;
pub mod types;

pub use commands::HostCommand;
pub use errors::{ConfigError, HudError, SlotError};
pub use events::{ButtonEvent, CountChange, HostEvent, InputDevice, MenuEvent};
pub use types::{ActionKind, FormId, Hand, Position, SlotKind};

pub type Result<T> = std::result::Result<T, HudError>;
