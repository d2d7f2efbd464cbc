//! Constant-time routing of events to handlers.

use crate::error::{Error, Result};
use crate::event::{EventRecord, EventTag, MAX_EVENT_TYPE};

/// A handler gets the shared context and the event; its effects go through
/// the session held in the context.
pub type Handler<C> = Box<dyn Fn(&C, &EventRecord)>;

/// One optional handler per event code, indexed directly by the code.
pub struct HandlerTable<C> {
    slots: [Option<Handler<C>>; MAX_EVENT_TYPE],
}

impl<C> Default for HandlerTable<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> HandlerTable<C> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Install `handler` for `tag`, replacing whatever was there.
    pub fn register<F>(&mut self, tag: EventTag, handler: F) -> Result<()>
    where
        F: Fn(&C, &EventRecord) + 'static,
    {
        let idx = tag.index().ok_or(Error::TagOutOfRange(tag.code()))?;
        self.slots[idx] = Some(Box::new(handler));
        Ok(())
    }

    pub fn lookup(&self, tag: EventTag) -> Option<&Handler<C>> {
        self.slots.get(tag.index()?)?.as_ref()
    }

    /// Run the handler for `record`, if any. Returns whether one ran.
    pub fn dispatch(&self, ctx: &C, record: &EventRecord) -> bool {
        match self.lookup(record.tag()) {
            Some(handler) => {
                handler(ctx, record);
                true
            }
            None => false,
        }
    }
}
