//! Live settings reload manager.
//!
//! Combines the file watcher with config loading so a changed settings
//! file is re-read, validated and published to the engine.

mod manager;


pub use manager::ReloadManager;
