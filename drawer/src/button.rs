//! The `ext-button` component.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::trace;

use crate::component::{Component, EventContext, EventResult, Frame, Mount};
use crate::config::DrawerConfig;
use crate::error::RegistryError;
use crate::event::{Event, MouseButton};
use crate::layout::Rect;
use crate::registry::Attributes;
use crate::render::{draw_text, paint_box};
use crate::timer::HideTimer;

/// What a button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    AddRow,
    AddCol,
    DelRow,
    DelCol,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::AddRow, Role::AddCol, Role::DelRow, Role::DelCol];

    pub fn is_delete(self) -> bool {
        matches!(self, Role::DelRow | Role::DelCol)
    }

    pub fn glyph(self) -> char {
        if self.is_delete() {
            '−'
        } else {
            '+'
        }
    }

    /// Style classes, most general first.
    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Role::AddRow => &[
                "app-drawer__button",
                "app-drawer__button--add",
                "app-drawer__button--add-row",
            ],
            Role::AddCol => &[
                "app-drawer__button",
                "app-drawer__button--add",
                "app-drawer__button--add-col",
            ],
            Role::DelRow | Role::DelCol => &["app-drawer__button", "app-drawer__button--del"],
        }
    }

    /// The `role` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::AddRow => "addRow",
            Role::AddCol => "addCol",
            Role::DelRow => "delRow",
            Role::DelCol => "delCol",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RegistryError::InvalidRole(s.to_string()))
    }
}

/// A `+` / `−` control.
///
/// Add buttons are always shown. Delete buttons start hidden, are shown by
/// their drawer while a cell is hovered, and hide after a short delay so the
/// pointer can travel from the table onto them. While hovered they stay
/// up; leaving or clicking them starts the delay again.
#[derive(Debug, Clone)]
pub struct Button {
    role: Role,
    visible: bool,
    hide: HideTimer,
    hide_delay: Duration,
    /// Explicit offsets. Unset axes fall back to the layout anchor.
    left: Option<i32>,
    top: Option<i32>,
    anchor: Mount,
    width: u16,
    hovered: bool,
    attached: bool,
}

impl Button {
    pub const TAG: &'static str = "ext-button";

    pub fn new(role: Role) -> Self {
        Self::with_config(role, &DrawerConfig::default())
    }

    pub fn with_config(role: Role, config: &DrawerConfig) -> Self {
        Self {
            role,
            visible: !role.is_delete(),
            hide: HideTimer::new(),
            hide_delay: config.hide_delay,
            left: None,
            top: None,
            anchor: Mount::default(),
            width: config.button_width.max(1),
            hovered: false,
            attached: false,
        }
    }

    /// Registry factory; reads the `role` attribute.
    pub fn create(
        attrs: &Attributes,
        config: &DrawerConfig,
    ) -> Result<Box<dyn Component>, RegistryError> {
        let role = attrs
            .get("role")
            .ok_or(RegistryError::MissingAttribute {
                tag: Self::TAG,
                name: "role",
            })?
            .parse::<Role>()?;
        Ok(Box::new(Self::with_config(role, config)))
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn glyph(&self) -> char {
        self.role.glyph()
    }

    pub fn classes(&self) -> &'static [&'static str] {
        self.role.classes()
    }

    /// Whether hover and click hide behaviour is wired up.
    pub fn has_hover_handlers(&self) -> bool {
        self.role.is_delete()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_hide_pending(&self) -> bool {
        self.hide.is_pending()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Show now, or hide once the delay elapses.
    ///
    /// Showing cancels a pending hide. Every hide request replaces the
    /// previous one.
    pub fn set_visible(&mut self, flag: bool, now: Instant) {
        if flag {
            self.hide.cancel();
            self.visible = true;
        } else {
            self.hide.schedule(now, self.hide_delay);
            trace!("{} hide scheduled", self.role);
        }
    }

    pub fn set_position_x(&mut self, px: i32) {
        self.left = Some(px);
    }

    pub fn set_position_y(&mut self, px: i32) {
        self.top = Some(px);
    }

    pub fn position_x(&self) -> Option<i32> {
        self.left
    }

    pub fn position_y(&self) -> Option<i32> {
        self.top
    }

    /// Where the layout puts the button on axes without an explicit offset.
    pub fn set_anchor(&mut self, anchor: Mount) {
        self.anchor = anchor;
    }

    /// Document-space box.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.left.unwrap_or(self.anchor.x),
            self.top.unwrap_or(self.anchor.y),
            self.width,
            1,
        )
    }

    /// Hit test against a document-space point. Hidden buttons never hit.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.visible && self.rect().contains(x, y)
    }

    /// Pointer entered the button.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        if self.has_hover_handlers() && self.hide.cancel() {
            trace!("{} hide cancelled by hover", self.role);
        }
    }

    /// Pointer left the button.
    pub fn pointer_leave(&mut self, now: Instant) {
        self.hovered = false;
        if self.has_hover_handlers() {
            self.set_visible(false, now);
        }
    }

    /// The button was clicked. Delete buttons start hiding.
    pub fn click(&mut self, now: Instant) {
        if self.has_hover_handlers() {
            self.set_visible(false, now);
        }
    }

    fn track_pointer(&mut self, x: i32, y: i32, now: Instant) {
        let inside = self.contains(x, y);
        if inside && !self.hovered {
            self.pointer_enter();
        } else if !inside && self.hovered {
            self.pointer_leave(now);
        }
    }
}

impl Component for Button {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn attach(&mut self, mount: Mount) {
        self.anchor = mount;
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
        self.hovered = false;
        self.hide.cancel();
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn handle_event(&mut self, event: &Event, cx: &EventContext) -> EventResult {
        match *event {
            Event::PointerMove { x, y } => {
                self.track_pointer(x, cx.document_y(y), cx.now);
                EventResult::Ignored
            }
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } if self.contains(x, cx.document_y(y)) => {
                self.click(cx.now);
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }

    fn render(&self, frame: &mut Frame<'_>) {
        if !self.visible {
            return;
        }
        let rect = self.rect();
        let style = frame.theme.compute(self.classes());
        paint_box(frame, rect, &style);

        let glyph = self.glyph().to_string();
        let x = rect.x + (rect.width as i32 - 1) / 2;
        draw_text(frame, x, rect.y, &glyph, 1, &style);
    }

    fn bounds(&self) -> Rect {
        self.rect()
    }

    fn tick(&mut self, now: Instant) -> bool {
        if self.hide.fire(now) {
            self.visible = false;
            self.hovered = false;
            trace!("{} hidden", self.role);
            return true;
        }
        false
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.hide.deadline()
    }
}
