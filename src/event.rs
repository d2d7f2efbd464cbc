//! Event records as the dispatch table sees them.

use x11rb::protocol::xproto;
use x11rb::protocol::Event;

pub type WindowId = xproto::Window;

/// One past the last core event code (`GeGeneric` is 35). Extension events
/// are numbered from 64 and never get a slot.
pub const MAX_EVENT_TYPE: usize = 36;

/// An X11 event code with the "sent event" bit cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EventTag(u8);

impl EventTag {
    pub const MAP_REQUEST: EventTag = EventTag(xproto::MAP_REQUEST_EVENT);

    pub const fn from_response_type(response_type: u8) -> Self {
        Self(response_type & 0x7f)
    }

    pub const fn code(self) -> u8 {
        self.0
    }

    /// Slot in a dense table, or `None` past `MAX_EVENT_TYPE`.
    pub fn index(self) -> Option<usize> {
        let idx = self.0 as usize;
        (idx < MAX_EVENT_TYPE).then_some(idx)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventRecord {
    /// A client wants its window mapped.
    CreateRequest { window: WindowId },
    /// Anything else. Only the tag is kept.
    Other { tag: EventTag },
}

impl EventRecord {
    pub fn tag(&self) -> EventTag {
        match self {
            EventRecord::CreateRequest { .. } => EventTag::MAP_REQUEST,
            EventRecord::Other { tag } => *tag,
        }
    }
}

impl From<Event> for EventRecord {
    fn from(event: Event) -> Self {
        match event {
            Event::MapRequest(ev) => EventRecord::CreateRequest { window: ev.window },
            // errors come through here too, as code 0
            other => EventRecord::Other {
                tag: EventTag::from_response_type(other.response_type()),
            },
        }
    }
}
