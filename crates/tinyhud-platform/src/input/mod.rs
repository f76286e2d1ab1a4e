//! Key resolution and the binding registry.
//!
//! [`resolve`] turns raw button events into canonical [`KeyId`]s and
//! [`KeyBindings`] maps those ids to HUD roles.

mod key_id;
mod registry;

pub use key_id::{resolve, KeyId};
pub use registry::{EditFlags, KeyBindings};
