//! Clipboard module for scrystats
//!
//! Provides clipboard functionality with support for:
//! - System clipboard (via arboard)
//! - OSC 52 escape sequences (for remote terminals)
//! - Auto mode (system with OSC 52 fallback)

mod backend;
mod osc52;
mod system;

pub use backend::{ClipboardError, copy_to_clipboard};
