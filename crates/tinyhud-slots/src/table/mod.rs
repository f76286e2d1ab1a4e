//! The slot table and its page/position handle.

mod edits;
mod feedback;
mod layout;
mod pages;
mod types;


pub use types::*;
