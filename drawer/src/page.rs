//! The document a root component lives in.

use std::time::Instant;

use log::trace;

use crate::buffer::Buffer;
use crate::component::{Component, EventContext, EventResult, Frame, Mount};
use crate::event::Event;
use crate::layout::Rect;
use crate::render::fill_rect;
use crate::theme::Theme;

/// Hosts one root component: owns the page scroll, routes input, advances
/// timers and paints frames.
pub struct Page {
    root: Box<dyn Component>,
    theme: Theme,
    scroll_y: i32,
    viewport: (u16, u16),
}

impl Page {
    pub fn new(root: Box<dyn Component>, theme: Theme) -> Self {
        Self {
            root,
            theme,
            scroll_y: 0,
            viewport: (0, 0),
        }
    }

    pub fn root(&self) -> &dyn Component {
        self.root.as_ref()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    /// Attach the root at a document position.
    pub fn mount(&mut self, at: Mount) {
        self.root.attach(at);
    }

    pub fn unmount(&mut self) {
        self.root.detach();
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.scroll_to(self.scroll_y);
    }

    /// Scroll so that document row `y` is at the top, within the content.
    pub fn scroll_to(&mut self, y: i32) {
        let content = self.root.bounds();
        let max = (content.bottom() - self.viewport.1 as i32).max(0);
        let clamped = y.clamp(0, max);
        if clamped != self.scroll_y {
            trace!("page scrolled to {clamped}");
        }
        self.scroll_y = clamped;
    }

    /// Route one input event.
    pub fn dispatch(&mut self, event: &Event, now: Instant) -> EventResult {
        match *event {
            Event::Scroll { delta_y } => {
                self.scroll_to(self.scroll_y + delta_y);
                EventResult::Handled
            }
            Event::Resize { width, height } => {
                self.resize(width, height);
                EventResult::Handled
            }
            _ => {
                let cx = EventContext::new(now, self.scroll_y);
                self.root.handle_event(event, &cx)
            }
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.root.tick(now)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.root.next_deadline()
    }

    /// Paint the page into `buf`, which covers the viewport.
    pub fn render(&self, buf: &mut Buffer) {
        let area = Rect::new(0, self.scroll_y, buf.width(), buf.height());
        let mut frame = Frame::new(buf, &self.theme, self.scroll_y);
        fill_rect(&mut frame, area, self.theme.background.to_rgb());
        self.root.render(&mut frame);
    }
}
