use std::time::Instant;

use crate::buffer::Buffer;
use crate::event::Event;
use crate::layout::Rect;
use crate::theme::Theme;

/// A document-space position a component is attached at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mount {
    pub x: i32,
    pub y: i32,
}

impl Mount {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Information shared with every component during one dispatch.
#[derive(Debug, Clone, Copy)]
pub struct EventContext {
    pub now: Instant,
    /// Vertical page scroll. Document y is viewport y plus this.
    pub scroll_y: i32,
}

impl EventContext {
    pub fn new(now: Instant, scroll_y: i32) -> Self {
        Self { now, scroll_y }
    }

    /// Convert a viewport row to document space.
    pub fn document_y(&self, y: i32) -> i32 {
        y + self.scroll_y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Handled,
    Ignored,
}

/// Render target for one frame.
pub struct Frame<'a> {
    pub buf: &'a mut Buffer,
    pub theme: &'a Theme,
    pub scroll_y: i32,
}

impl<'a> Frame<'a> {
    pub fn new(buf: &'a mut Buffer, theme: &'a Theme, scroll_y: i32) -> Self {
        Self {
            buf,
            theme,
            scroll_y,
        }
    }

    /// Translate a document-space box into the viewport.
    pub fn to_viewport(&self, rect: Rect) -> Rect {
        rect.translate(0, -self.scroll_y)
    }
}

/// A UI element living in a page.
///
/// Components are attached once they have a place in the document, receive
/// input while attached, and paint themselves into a frame. Time-driven
/// state (debounced hides) advances through `tick`.
pub trait Component: Send {
    /// The registry tag this component is created under.
    fn tag(&self) -> &'static str;

    fn attach(&mut self, mount: Mount);

    fn detach(&mut self);

    fn is_attached(&self) -> bool;

    fn handle_event(&mut self, event: &Event, cx: &EventContext) -> EventResult;

    fn render(&self, frame: &mut Frame<'_>);

    /// Document-space extent.
    fn bounds(&self) -> Rect;

    /// Apply any timers that are due. Returns true if something changed.
    fn tick(&mut self, _now: Instant) -> bool {
        false
    }

    /// Earliest instant `tick` has work to do.
    fn next_deadline(&self) -> Option<Instant> {
        None
    }
}
