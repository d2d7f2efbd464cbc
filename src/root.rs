//! Geometry of the root window, captured once at startup.

use crate::event::WindowId;
use crate::session::Session;

/// Snapshot of the screen-covering window. Fields are private so the
/// dimensions cannot change after [`RootWindow::init`]; resolution changes
/// are not tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootWindow {
    id: WindowId,
    width: u32,
    height: u32,
    layout: u32,
}

impl RootWindow {
    pub fn init<S: Session>(session: &S) -> Self {
        let (width, height) = session.screen_size();
        Self {
            id: session.root(),
            width: u32::from(width),
            height: u32::from(height),
            layout: 0,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Always `(0, 0)`.
    pub fn origin(&self) -> (i32, i32) {
        (0, 0)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reserved for a future placement policy. Nothing reads it yet and it
    /// has no defined meaning.
    pub fn layout(&self) -> u32 {
        self.layout
    }
}
