//! Fullscreen placement for newly mapped windows.
//!
//! Each window is moved to the root origin, sized to the whole screen and
//! mapped. Windows placed earlier are left alone; which one ends up on top is
//! decided by the server's stacking order.

use tracing::{debug, warn};

use crate::event::WindowId;
use crate::root::RootWindow;
use crate::session::Session;

pub fn on_create_request<S: Session>(session: &S, root: &RootWindow, window: WindowId) {
    let (x, y) = root.origin();
    debug!(
        "placing window {} at {},{} {}x{}",
        window,
        x,
        y,
        root.width(),
        root.height()
    );
    if let Err(e) = session.move_resize(window, x, y, root.width(), root.height()) {
        warn!("move_resize on window {} failed: {}", window, e);
    }
    if let Err(e) = session.show(window) {
        warn!("map on window {} failed: {}", window, e);
    }
}
