//! File watcher for live settings reload.
//!
//! Uses the `notify` crate to watch the settings file for changes,
//! with a 500ms debounce so editor save sequences produce one reload.

mod config_watcher;


pub use config_watcher::ConfigWatcher;
