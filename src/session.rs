//! The connection to the display server.

use tracing::{debug, info};
use x11rb::connection::Connection;
use x11rb::errors::ReplyError;
use x11rb::protocol::xproto::{self, ConnectionExt};
use x11rb::protocol::ErrorKind;
use x11rb::rust_connection::RustConnection;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::event::{EventRecord, WindowId};

/// Everything the window manager asks of the display server.
///
/// `move_resize` and `show` only queue requests; the server applies them
/// asynchronously. `next_event` blocks and returns `Err` once the connection
/// is no longer usable. `close` takes the session by value so it can only
/// happen once.
pub trait Session {
    fn root(&self) -> WindowId;
    fn screen_size(&self) -> (u16, u16);
    fn subscribe(&self, window: WindowId, mask: xproto::EventMask) -> Result<()>;
    fn next_event(&self) -> Result<EventRecord>;
    fn move_resize(&self, window: WindowId, x: i32, y: i32, width: u32, height: u32)
        -> Result<()>;
    fn show(&self, window: WindowId) -> Result<()>;
    fn close(self);
}

pub struct X11Session {
    conn: RustConnection,
    scrno: usize,
}

impl X11Session {
    pub fn open(config: &Config) -> Result<Self> {
        let (conn, scrno) = x11rb::connect(config.display.as_deref())?;
        info!("connected to X server, screen {}", scrno);
        Ok(Self { conn, scrno })
    }

    fn screen(&self) -> &xproto::Screen {
        &self.conn.setup().roots[self.scrno]
    }
}

impl Session for X11Session {
    fn root(&self) -> WindowId {
        self.screen().root
    }

    fn screen_size(&self) -> (u16, u16) {
        let screen = self.screen();
        (screen.width_in_pixels, screen.height_in_pixels)
    }

    fn subscribe(&self, window: WindowId, mask: xproto::EventMask) -> Result<()> {
        let change = xproto::ChangeWindowAttributesAux::new().event_mask(mask);
        match self.conn.change_window_attributes(window, &change)?.check() {
            Ok(()) => Ok(()),
            Err(ReplyError::X11Error(e)) if e.error_kind == ErrorKind::Access => {
                Err(Error::AlreadyRunning)
            }
            Err(ReplyError::X11Error(e)) => Err(Error::Protocol(e)),
            Err(ReplyError::ConnectionError(e)) => Err(e.into()),
        }
    }

    fn next_event(&self) -> Result<EventRecord> {
        // queued configure/map requests must reach the server before we block
        self.conn.flush()?;
        let event = self.conn.wait_for_event()?;
        Ok(EventRecord::from(event))
    }

    fn move_resize(
        &self,
        window: WindowId,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    ) -> Result<()> {
        self.conn.configure_window(
            window,
            &xproto::ConfigureWindowAux::new()
                .x(x)
                .y(y)
                .width(width)
                .height(height),
        )?;
        Ok(())
    }

    fn show(&self, window: WindowId) -> Result<()> {
        self.conn.map_window(window)?;
        Ok(())
    }

    fn close(self) {
        if let Err(e) = self.conn.flush() {
            debug!("flush on close failed: {}", e);
        }
        drop(self.conn);
        info!("closed connection to X server");
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use x11rb::errors::ConnectionError;
    use x11rb::protocol::xproto::EventMask;

    use super::Session;
    use crate::error::{Error, Result};
    use crate::event::{EventRecord, WindowId};

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Command {
        Subscribe { window: WindowId, mask: EventMask },
        MoveResize { window: WindowId, x: i32, y: i32, width: u32, height: u32 },
        Show { window: WindowId },
        Close,
    }

    /// Shared view of what a `FakeSession` was asked to do. Survives `close`.
    #[derive(Clone, Default)]
    pub struct Recorder(Rc<RefCell<Vec<Command>>>);

    impl Recorder {
        pub fn commands(&self) -> Vec<Command> {
            self.0.borrow().clone()
        }

        pub fn count(&self, cmd: &Command) -> usize {
            self.0.borrow().iter().filter(|c| *c == cmd).count()
        }

        fn push(&self, cmd: Command) {
            self.0.borrow_mut().push(cmd);
        }
    }

    /// Scripted display server. Runs out of events by reporting a lost
    /// connection.
    pub struct FakeSession {
        root: WindowId,
        width: u16,
        height: u16,
        events: RefCell<VecDeque<EventRecord>>,
        refuse_subscribe: bool,
        recorder: Recorder,
    }

    impl FakeSession {
        pub fn new(root: WindowId, width: u16, height: u16) -> Self {
            Self {
                root,
                width,
                height,
                events: RefCell::new(VecDeque::new()),
                refuse_subscribe: false,
                recorder: Recorder::default(),
            }
        }

        pub fn with_events(self, events: impl IntoIterator<Item = EventRecord>) -> Self {
            self.events.borrow_mut().extend(events);
            self
        }

        pub fn refusing_subscribe(mut self) -> Self {
            self.refuse_subscribe = true;
            self
        }

        pub fn recorder(&self) -> Recorder {
            self.recorder.clone()
        }
    }

    impl Session for FakeSession {
        fn root(&self) -> WindowId {
            self.root
        }

        fn screen_size(&self) -> (u16, u16) {
            (self.width, self.height)
        }

        fn subscribe(&self, window: WindowId, mask: EventMask) -> Result<()> {
            if self.refuse_subscribe {
                return Err(Error::AlreadyRunning);
            }
            self.recorder.push(Command::Subscribe { window, mask });
            Ok(())
        }

        fn next_event(&self) -> Result<EventRecord> {
            self.events
                .borrow_mut()
                .pop_front()
                .ok_or(Error::Connection(ConnectionError::UnknownError))
        }

        fn move_resize(
            &self,
            window: WindowId,
            x: i32,
            y: i32,
            width: u32,
            height: u32,
        ) -> Result<()> {
            self.recorder.push(Command::MoveResize { window, x, y, width, height });
            Ok(())
        }

        fn show(&self, window: WindowId) -> Result<()> {
            self.recorder.push(Command::Show { window });
            Ok(())
        }

        fn close(self) {
            self.recorder.push(Command::Close);
        }
    }
}
