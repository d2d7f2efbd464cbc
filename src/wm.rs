//! Startup, the event loop and shutdown.

use tracing::{debug, info, trace};
use x11rb::protocol::xproto::EventMask;

use crate::dispatch::HandlerTable;
use crate::error::Result;
use crate::event::{EventRecord, EventTag};
use crate::placement;
use crate::root::RootWindow;
use crate::session::Session;

/// State handed to every handler.
pub struct Context<S> {
    pub session: S,
    pub root: RootWindow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

pub struct WindowManager<S: Session> {
    ctx: Context<S>,
    handlers: HandlerTable<Context<S>>,
    state: LoopState,
}

// MapRequest needs the redirect; the notify half matches what other managers select.
fn root_event_mask() -> EventMask {
    EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY
}

impl<S: Session + 'static> WindowManager<S> {
    /// Reads the root geometry, takes the substructure redirect and builds the
    /// handler table. On failure the session is closed before returning.
    pub fn new(session: S) -> Result<Self> {
        let setup = Self::setup(&session);
        match setup {
            Ok((root, handlers)) => Ok(Self {
                ctx: Context { session, root },
                handlers,
                state: LoopState::Running,
            }),
            Err(e) => {
                session.close();
                Err(e)
            }
        }
    }

    fn setup(session: &S) -> Result<(RootWindow, HandlerTable<Context<S>>)> {
        let root = RootWindow::init(session);
        info!(
            "root window {} is {}x{}",
            root.id(),
            root.width(),
            root.height()
        );
        session.subscribe(root.id(), root_event_mask())?;
        info!("registered as window manager");

        let mut handlers = HandlerTable::new();
        handlers.register(
            EventTag::MAP_REQUEST,
            |ctx: &Context<S>, record: &EventRecord| {
                // a mismatched payload under this tag is dropped
                if let EventRecord::CreateRequest { window } = *record {
                    placement::on_create_request(&ctx.session, &ctx.root, window);
                }
            },
        )?;
        Ok((root, handlers))
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn root(&self) -> &RootWindow {
        &self.ctx.root
    }

    /// Route one event. Unknown and unregistered tags do nothing.
    pub fn dispatch(&self, record: &EventRecord) {
        if self.handlers.dispatch(&self.ctx, record) {
            debug!("handled {:?}", record);
        } else {
            trace!("ignored event with tag {}", record.tag().code());
        }
    }

    /// Block on events until the connection goes away.
    pub fn run(&mut self) {
        info!("entering event loop");
        while self.state == LoopState::Running {
            match self.ctx.session.next_event() {
                Ok(record) => self.dispatch(&record),
                Err(e) => {
                    info!("event loop stopped: {}", e);
                    self.state = LoopState::Stopped;
                }
            }
        }
    }

    pub fn shutdown(self) {
        info!("shutting down");
        self.ctx.session.close();
    }
}
