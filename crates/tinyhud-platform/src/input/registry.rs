use tinyhud_common::{MenuEvent, Position};
use tinyhud_config::schema::ControlsConfig;
use tracing::{debug, warn};

use super::key_id::KeyId;

/// Transient flags set while the player holds a cycle-edit key in a menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditFlags {
    pub edit_down: bool,
    pub edit_left_down: bool,
    pub remove_down: bool,
}

impl EditFlags {
    pub fn any(&self) -> bool {
        self.edit_down || self.edit_left_down || self.remove_down
    }
}

/// Maps resolved keys to their HUD roles.
///
/// Built from [`ControlsConfig`] at startup and rebuilt on config reload.
/// The top execute key is not configured: it mirrors whatever the game
/// currently maps to its shout action and is refreshed every input turn.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    top_action: KeyId,
    right_action: KeyId,
    bottom_action: KeyId,
    left_action: KeyId,
    bottom_execute_or_toggle: KeyId,
    hide_show: KeyId,
    top_execute: KeyId,
    edit: EditFlags,
}

impl KeyBindings {
    /// Build the bindings from the `[controls]` settings section.
    pub fn from_config(config: &ControlsConfig) -> Self {
        let bindings = Self {
            top_action: KeyId(config.top_action_key),
            right_action: KeyId(config.right_action_key),
            bottom_action: KeyId(config.bottom_action_key),
            left_action: KeyId(config.left_action_key),
            bottom_execute_or_toggle: KeyId(config.toggle_key),
            hide_show: KeyId::from_config(config.hide_show_key),
            top_execute: KeyId::NONE,
            edit: EditFlags::default(),
        };

        for (name, key) in bindings.required() {
            if !key.is_valid() || key.device().is_none() {
                warn!("{name} key {} is not a valid key id", key.0);
            }
        }

        bindings
    }

    fn required(&self) -> [(&'static str, KeyId); 5] {
        [
            ("top action", self.top_action),
            ("right action", self.right_action),
            ("bottom action", self.bottom_action),
            ("left action", self.left_action),
            ("toggle", self.bottom_execute_or_toggle),
        ]
    }

    /// True once every required role has a valid key. Gates all input.
    pub fn keys_configured(&self) -> bool {
        self.required()
            .iter()
            .all(|(_, key)| key.is_valid() && key.device().is_some())
    }

    /// The position a cycle key belongs to, if `key` is one of the four.
    pub fn cycle_position(&self, key: KeyId) -> Option<Position> {
        [
            (self.top_action, Position::Top),
            (self.right_action, Position::Right),
            (self.bottom_action, Position::Bottom),
            (self.left_action, Position::Left),
        ]
        .into_iter()
        .find(|(bound, _)| bound.matches(key))
        .map(|(_, pos)| pos)
    }

    pub fn is_position_button(&self, key: KeyId) -> bool {
        self.cycle_position(key).is_some()
    }

    /// The position whose active slots a key addresses.
    ///
    /// Besides the cycle keys, the toggle key executes the bottom position
    /// and the live shout key executes the top position.
    pub fn position_for_key(&self, key: KeyId) -> Option<Position> {
        if let Some(pos) = self.cycle_position(key) {
            return Some(pos);
        }
        if self.bottom_execute_or_toggle.matches(key) {
            return Some(Position::Bottom);
        }
        if self.top_execute.matches(key) {
            return Some(Position::Top);
        }
        None
    }

    // -- Accessors --

    pub fn top_action(&self) -> KeyId {
        self.top_action
    }

    pub fn right_action(&self) -> KeyId {
        self.right_action
    }

    pub fn bottom_action(&self) -> KeyId {
        self.bottom_action
    }

    pub fn left_action(&self) -> KeyId {
        self.left_action
    }

    pub fn bottom_execute_or_toggle(&self) -> KeyId {
        self.bottom_execute_or_toggle
    }

    pub fn hide_show(&self) -> KeyId {
        self.hide_show
    }

    pub fn top_execute(&self) -> KeyId {
        self.top_execute
    }

    pub fn set_top_action(&mut self, key: KeyId) {
        self.top_action = key;
    }

    pub fn set_right_action(&mut self, key: KeyId) {
        self.right_action = key;
    }

    pub fn set_bottom_action(&mut self, key: KeyId) {
        self.bottom_action = key;
    }

    pub fn set_left_action(&mut self, key: KeyId) {
        self.left_action = key;
    }

    pub fn set_bottom_execute_or_toggle(&mut self, key: KeyId) {
        self.bottom_execute_or_toggle = key;
    }

    pub fn set_hide_show(&mut self, key: KeyId) {
        self.hide_show = key;
    }

    /// Refresh the live shout key read from the game's control map.
    pub fn set_top_execute(&mut self, key: KeyId) {
        self.top_execute = key;
    }

    // -- Edit flags --

    pub fn edit_flags(&self) -> EditFlags {
        self.edit
    }

    pub fn is_edit_down(&self) -> bool {
        self.edit.edit_down
    }

    pub fn is_edit_left_down(&self) -> bool {
        self.edit.edit_left_down
    }

    pub fn is_remove_down(&self) -> bool {
        self.edit.remove_down
    }

    pub fn set_is_edit_down(&mut self, down: bool) {
        self.edit.edit_down = down;
    }

    pub fn set_is_edit_left_down(&mut self, down: bool) {
        self.edit.edit_left_down = down;
    }

    pub fn set_is_remove_down(&mut self, down: bool) {
        self.edit.remove_down = down;
    }

    /// Clear the edit flags when an inventory, magic or favorites menu closes.
    ///
    /// Returns whether any flag was cleared.
    pub fn on_menu_event(&mut self, event: &MenuEvent) -> bool {
        if event.opening || !event.is_item_menu() {
            return false;
        }
        let had_flags = self.edit.any();
        self.edit = EditFlags::default();
        if had_flags {
            debug!("cleared cycle edit flags on {} close", event.menu);
        }
        had_flags
    }
}
