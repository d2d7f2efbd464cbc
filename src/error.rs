use thiserror::Error;
use x11rb::errors::{ConnectError, ConnectionError};
use x11rb::x11_utils::X11Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The display server could not be reached at startup.
    #[error("cannot connect to X server: {0}")]
    Connect(#[from] ConnectError),
    /// The connection broke while running; ends the event loop.
    #[error("connection to X server lost: {0}")]
    Connection(#[from] ConnectionError),
    #[error("a window manager is already running on this display (failed to capture SubstructureRedirect on root window)")]
    AlreadyRunning,
    #[error("X11 error: {0:?}")]
    Protocol(X11Error),
    #[error("event tag {0} is outside the handler table")]
    TagOutOfRange(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
