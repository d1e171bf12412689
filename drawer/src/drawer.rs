//! The `app-drawer` component: a table with its add/delete controls.

use std::time::Instant;

use log::{debug, warn};

use crate::button::{Button, Role};
use crate::component::{Component, EventContext, EventResult, Frame, Mount};
use crate::config::DrawerConfig;
use crate::controls::ManageControls;
use crate::error::RegistryError;
use crate::event::{Event, MouseButton};
use crate::layout::{DrawerLayout, Rect};
use crate::registry::Attributes;
use crate::table::Table;

/// Owns one table and its four buttons and keeps them in step.
///
/// Add buttons sit right of and below the table. Delete buttons follow the
/// hovered cell: the column button along the top edge, the row button along
/// the left edge.
#[derive(Debug, Clone)]
pub struct Drawer {
    table: Table,
    del_row: Button,
    del_col: Button,
    add_col: Button,
    add_row: Button,
    origin: Mount,
    button_width: u16,
    attached: bool,
}

impl Default for Drawer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawer {
    pub const TAG: &'static str = "app-drawer";

    pub fn new() -> Self {
        Self::with_config(&DrawerConfig::default())
    }

    pub fn with_config(config: &DrawerConfig) -> Self {
        Self {
            table: Table::with_config(config),
            del_row: Button::with_config(Role::DelRow, config),
            del_col: Button::with_config(Role::DelCol, config),
            add_col: Button::with_config(Role::AddCol, config),
            add_row: Button::with_config(Role::AddRow, config),
            origin: Mount::default(),
            button_width: config.button_width.max(1),
            attached: false,
        }
    }

    pub fn create(
        _attrs: &Attributes,
        config: &DrawerConfig,
    ) -> Result<Box<dyn Component>, RegistryError> {
        Ok(Box::new(Self::with_config(config)))
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    pub fn button(&self, role: Role) -> &Button {
        match role {
            Role::AddRow => &self.add_row,
            Role::AddCol => &self.add_col,
            Role::DelRow => &self.del_row,
            Role::DelCol => &self.del_col,
        }
    }

    fn button_mut(&mut self, role: Role) -> &mut Button {
        match role {
            Role::AddRow => &mut self.add_row,
            Role::AddCol => &mut self.add_col,
            Role::DelRow => &mut self.del_row,
            Role::DelCol => &mut self.del_col,
        }
    }

    /// Buttons in paint order.
    fn buttons(&self) -> [&Button; 4] {
        [&self.del_row, &self.del_col, &self.add_col, &self.add_row]
    }

    fn buttons_mut(&mut self) -> [&mut Button; 4] {
        [
            &mut self.del_row,
            &mut self.del_col,
            &mut self.add_col,
            &mut self.add_row,
        ]
    }

    /// Apply one control event from the table.
    ///
    /// The last remaining row or column can never be offered for deletion.
    /// Only the free axis of each delete button follows the event.
    pub fn manage_controls(&mut self, event: &ManageControls, now: Instant) {
        let rows = self.table.row_count();
        let columns = self.table.column_count();

        self.del_col.set_visible(columns != 1 && event.visible, now);
        self.del_row.set_visible(rows != 1 && event.visible, now);

        if let Some(x) = event.pos_x {
            self.del_col.set_position_x(x);
        }
        if let Some(y) = event.pos_y {
            self.del_row.set_position_y(y);
        }
    }

    /// Run the click handlers for `role`: the button's own, then the table
    /// mutation it is wired to.
    pub fn press(&mut self, role: Role, now: Instant) {
        self.button_mut(role).click(now);

        let result = match role {
            Role::AddRow => {
                self.table.add_row();
                Ok(())
            }
            Role::AddCol => {
                self.table.add_column();
                Ok(())
            }
            Role::DelRow if self.table.row_count() == 1 => {
                warn!("{role} ignored: the last row cannot be deleted");
                Ok(())
            }
            Role::DelCol if self.table.column_count() == 1 => {
                warn!("{role} ignored: the last column cannot be deleted");
                Ok(())
            }
            Role::DelRow => self.table.delete_row().map(|_| ()),
            Role::DelCol => self.table.delete_column().map(|_| ()),
        };
        if let Err(e) = result {
            warn!("{role} ignored: {e}");
        }

        self.relayout();
    }

    /// The visible button under a document-space point, topmost first.
    pub fn button_at(&self, x: i32, y: i32) -> Option<Role> {
        self.buttons()
            .into_iter()
            .rev()
            .find(|button| button.contains(x, y))
            .map(Button::role)
    }

    fn sync_controls(&mut self, now: Instant) {
        for event in self.table.drain_controls() {
            self.manage_controls(&event, now);
        }
    }

    /// Start hiding a delete button that would remove the last row or
    /// column, even if hovering it cancelled an earlier hide.
    fn hide_last_line_controls(&mut self, now: Instant) {
        let rows = self.table.row_count();
        let columns = self.table.column_count();
        for (button, count) in [(&mut self.del_row, rows), (&mut self.del_col, columns)] {
            if count == 1 && button.is_visible() && !button.is_hide_pending() {
                button.set_visible(false, now);
            }
        }
    }

    fn relayout(&mut self) {
        let layout = DrawerLayout::compute(self.origin, self.table.table_rect(), self.button_width);
        self.del_row.set_anchor(layout.del_row);
        self.del_col.set_anchor(layout.del_col);
        self.add_col.set_anchor(layout.add_col);
        self.add_row.set_anchor(layout.add_row);
    }
}

impl Component for Drawer {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn attach(&mut self, mount: Mount) {
        self.origin = mount;
        self.table.attach(DrawerLayout::table_origin(mount, self.button_width));

        let layout = DrawerLayout::compute(mount, self.table.table_rect(), self.button_width);
        self.del_row.attach(layout.del_row);
        self.del_col.attach(layout.del_col);
        self.add_col.attach(layout.add_col);
        self.add_row.attach(layout.add_row);

        self.attached = true;
        debug!(
            "drawer attached at ({}, {}) with a {}x{} grid",
            mount.x,
            mount.y,
            self.table.row_count(),
            self.table.column_count()
        );
    }

    fn detach(&mut self) {
        self.table.detach();
        for button in self.buttons_mut() {
            button.detach();
        }
        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn handle_event(&mut self, event: &Event, cx: &EventContext) -> EventResult {
        match *event {
            Event::PointerMove { .. } => {
                self.table.handle_event(event, cx);
                self.sync_controls(cx.now);
                for button in self.buttons_mut() {
                    button.handle_event(event, cx);
                }
                self.hide_last_line_controls(cx.now);
                EventResult::Ignored
            }
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => match self.button_at(x, cx.document_y(y)) {
                Some(role) => {
                    self.press(role, cx.now);
                    EventResult::Handled
                }
                None => self.table.handle_event(event, cx),
            },
            Event::Key { .. } => self.table.handle_event(event, cx),
            _ => EventResult::Ignored,
        }
    }

    fn render(&self, frame: &mut Frame<'_>) {
        self.table.render(frame);
        for button in self.buttons() {
            button.render(frame);
        }
    }

    fn bounds(&self) -> Rect {
        self.buttons()
            .into_iter()
            .fold(self.table.bounds(), |acc, button| acc.union(button.bounds()))
    }

    fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for button in self.buttons_mut() {
            changed |= button.tick(now);
        }
        changed
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.buttons()
            .into_iter()
            .filter_map(|button| button.next_deadline())
            .min()
    }
}
