//! monowm: a fullscreen-only X11 window manager.
//!
//! Every window that asks to be mapped is resized to cover the root window
//! and shown. Events are routed through a fixed table indexed by event code.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod placement;
pub mod root;
pub mod session;
pub mod wm;

pub use error::{Error, Result};
