//! The `ext-table` component: an editable, rectangular grid.

use log::debug;

use crate::component::{Component, EventContext, EventResult, Frame, Mount};
use crate::config::DrawerConfig;
use crate::controls::ManageControls;
use crate::error::{RegistryError, TableError};
use crate::event::{Event, Key};
use crate::layout::{GridGeometry, GridHit, Rect};
use crate::registry::Attributes;
use crate::render::{draw_text, paint_box, truncate_to_width};

/// The cell a delete will act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTarget {
    pub row: usize,
    pub column: usize,
}

impl HoverTarget {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TableCell {
    text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TableRow {
    cells: Vec<TableCell>,
}

/// Grid of rows and cells with hover tracking.
///
/// Every row holds the same number of cells after any mutation. Hovering a
/// cell records it as the delete target and queues a [`ManageControls`]
/// event for the owner to drain; leaving the table queues a hide.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<TableRow>,
    geometry: GridGeometry,
    initial_rows: usize,
    initial_columns: usize,
    origin: Mount,

    hover: Option<HoverTarget>,
    pos_x: Option<i32>,
    pos_y: Option<i32>,

    /// What the pointer was last over; `None` while outside the table.
    pointer: Option<GridHit>,
    outbox: Vec<ManageControls>,

    attached: bool,
    initialized: bool,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub const TAG: &'static str = "ext-table";

    pub fn new() -> Self {
        Self::with_config(&DrawerConfig::default())
    }

    pub fn with_config(config: &DrawerConfig) -> Self {
        Self {
            rows: Vec::new(),
            geometry: GridGeometry::from_config(config),
            initial_rows: config.initial_rows,
            initial_columns: config.initial_columns,
            origin: Mount::default(),
            hover: None,
            pos_x: None,
            pos_y: None,
            pointer: None,
            outbox: Vec::new(),
            attached: false,
            initialized: false,
        }
    }

    pub fn create(
        _attrs: &Attributes,
        config: &DrawerConfig,
    ) -> Result<Box<dyn Component>, RegistryError> {
        Ok(Box::new(Self::with_config(config)))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row; the grid is rectangular.
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, |row| row.cells.len())
    }

    /// Current delete target, if a cell has been hovered since the last
    /// delete.
    pub fn hover_target(&self) -> Option<HoverTarget> {
        self.hover
    }

    /// Last recorded control position as `(pos_x, pos_y)`.
    pub fn control_position(&self) -> (Option<i32>, Option<i32>) {
        (self.pos_x, self.pos_y)
    }

    pub fn origin(&self) -> Mount {
        self.origin
    }

    /// Move the table without re-running first-attach initialisation.
    pub fn set_origin(&mut self, origin: Mount) {
        self.origin = origin;
    }

    /// Append a row, filled to the current column count.
    pub fn add_row(&mut self) {
        let columns = self.column_count();
        let mut row = TableRow::default();
        while row.cells.len() < columns {
            row.cells.push(TableCell::default());
        }
        self.rows.push(row);
        debug!("row added, grid is {}x{}", self.row_count(), self.column_count());
    }

    /// Append one cell to every row.
    pub fn add_column(&mut self) {
        for row in &mut self.rows {
            row.cells.push(TableCell::default());
        }
        debug!(
            "column added, grid is {}x{}",
            self.row_count(),
            self.column_count()
        );
    }

    /// Remove the hovered row and forget the hover target.
    ///
    /// Returns the removed index.
    pub fn delete_row(&mut self) -> Result<usize, TableError> {
        let target = self.hover.ok_or(TableError::NoHoverTarget)?;
        if target.row >= self.rows.len() {
            return Err(TableError::RowOutOfRange {
                index: target.row,
                len: self.rows.len(),
            });
        }

        self.rows.remove(target.row);
        self.reset_controls();
        debug!(
            "row {} deleted, grid is {}x{}",
            target.row,
            self.row_count(),
            self.column_count()
        );
        Ok(target.row)
    }

    /// Remove the hovered column from every row and forget the hover target.
    ///
    /// Returns the removed index.
    pub fn delete_column(&mut self) -> Result<usize, TableError> {
        let target = self.hover.ok_or(TableError::NoHoverTarget)?;
        let columns = self.column_count();
        if target.column >= columns {
            return Err(TableError::ColumnOutOfRange {
                index: target.column,
                len: columns,
            });
        }

        for row in &mut self.rows {
            row.cells.remove(target.column);
        }
        self.reset_controls();
        debug!(
            "column {} deleted, grid is {}x{}",
            target.column,
            self.row_count(),
            self.column_count()
        );
        Ok(target.column)
    }

    fn reset_controls(&mut self) {
        self.hover = None;
        self.pos_x = None;
        self.pos_y = None;
        // The grid moved under the pointer; the next move re-reports.
        if self.pointer.is_some() {
            self.pointer = Some(GridHit::Spacing);
        }
    }

    pub fn cell_text(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.cells.get(column))
            .map(|cell| cell.text.as_str())
    }

    pub fn set_cell_text(
        &mut self,
        row: usize,
        column: usize,
        text: impl Into<String>,
    ) -> Result<(), TableError> {
        let len = self.rows.len();
        let columns = self.column_count();
        let cell = self
            .rows
            .get_mut(row)
            .ok_or(TableError::RowOutOfRange { index: row, len })?
            .cells
            .get_mut(column)
            .ok_or(TableError::ColumnOutOfRange {
                index: column,
                len: columns,
            })?;
        cell.text = text.into();
        Ok(())
    }

    /// Document-space bounds of the whole table.
    pub fn table_rect(&self) -> Rect {
        self.geometry.table_rect(self.origin, self.row_count(), self.column_count())
    }

    /// Viewport bounds of a cell at the given page scroll.
    pub fn cell_bounds(&self, row: usize, column: usize, scroll_y: i32) -> Option<Rect> {
        if row >= self.row_count() || column >= self.column_count() {
            return None;
        }
        Some(
            self.geometry
                .cell_rect(self.origin, row, column)
                .translate(0, -scroll_y),
        )
    }

    /// Viewport bounds of a row at the given page scroll.
    pub fn row_bounds(&self, row: usize, scroll_y: i32) -> Option<Rect> {
        if row >= self.row_count() {
            return None;
        }
        Some(
            self.geometry
                .row_rect(self.origin, row, self.column_count())
                .translate(0, -scroll_y),
        )
    }

    /// Track the pointer at viewport `(x, y)`.
    ///
    /// Queues a show event whenever the pointer lands on a new part of the
    /// table, and a hide event when it leaves the table.
    pub fn pointer_move(&mut self, x: i32, y: i32, scroll_y: i32) {
        let hit = self.geometry.locate(
            self.origin,
            self.row_count(),
            self.column_count(),
            x,
            y + scroll_y,
        );

        let Some(hit) = hit else {
            self.pointer_leave();
            return;
        };
        if self.pointer == Some(hit) {
            return;
        }
        self.pointer = Some(hit);

        if let GridHit::Cell { row, column } = hit {
            self.pointer_over_cell(HoverTarget::new(row, column), scroll_y);
        }
        self.outbox.push(ManageControls::show(self.pos_x, self.pos_y));
    }

    /// The pointer left the table.
    pub fn pointer_leave(&mut self) {
        if self.pointer.take().is_some() {
            self.outbox.push(ManageControls::hide());
        }
    }

    fn pointer_over_cell(&mut self, target: HoverTarget, scroll_y: i32) {
        let (Some(cell), Some(row)) = (
            self.cell_bounds(target.row, target.column, scroll_y),
            self.row_bounds(target.row, scroll_y),
        ) else {
            return;
        };

        self.hover = Some(target);
        self.pos_x = Some(cell.left());
        self.pos_y = Some(row.top() + scroll_y);
        debug!("hovering cell ({}, {})", target.row, target.column);
    }

    /// Take the queued control events.
    pub fn drain_controls(&mut self) -> Vec<ManageControls> {
        std::mem::take(&mut self.outbox)
    }

    fn edit_hovered(&mut self, key: Key) -> EventResult {
        let Some(target) = self.hover else {
            return EventResult::Ignored;
        };
        let Some(cell) = self
            .rows
            .get_mut(target.row)
            .and_then(|row| row.cells.get_mut(target.column))
        else {
            return EventResult::Ignored;
        };

        match key {
            Key::Char(c) if !c.is_control() => cell.text.push(c),
            Key::Backspace => {
                cell.text.pop();
            }
            Key::Delete => cell.text.clear(),
            _ => return EventResult::Ignored,
        }
        EventResult::Handled
    }

    fn initialize(&mut self) {
        for _ in 0..self.initial_rows {
            self.add_row();
        }
        for _ in 0..self.initial_columns {
            self.add_column();
        }
        self.initialized = true;
    }
}

impl Component for Table {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn attach(&mut self, mount: Mount) {
        self.origin = mount;
        self.attached = true;
        if !self.initialized {
            self.initialize();
        }
    }

    fn detach(&mut self) {
        self.attached = false;
        self.pointer = None;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn handle_event(&mut self, event: &Event, cx: &EventContext) -> EventResult {
        match *event {
            Event::PointerMove { x, y } => {
                self.pointer_move(x, y, cx.scroll_y);
                EventResult::Ignored
            }
            Event::Key { key, modifiers } if !modifiers.ctrl && !modifiers.alt => {
                self.edit_hovered(key)
            }
            _ => EventResult::Ignored,
        }
    }

    fn render(&self, frame: &mut Frame<'_>) {
        let table_style = frame.theme.compute(&["table-container__table"]);
        paint_box(frame, self.table_rect(), &table_style);

        let columns = self.column_count();
        let width = self.geometry.cell_width;
        for (r, row) in self.rows.iter().enumerate() {
            for (c, cell) in row.cells.iter().enumerate().take(columns) {
                let hovered = self.hover == Some(HoverTarget::new(r, c))
                    && matches!(self.pointer, Some(GridHit::Cell { .. }));
                let style = if hovered {
                    frame.theme.compute(&["table__cell", "table__cell--hover"])
                } else {
                    frame.theme.compute(&["table__cell"])
                };

                let rect = self.geometry.cell_rect(self.origin, r, c);
                paint_box(frame, rect, &style);
                if !cell.text.is_empty() {
                    let text = truncate_to_width(&cell.text, width as usize);
                    draw_text(frame, rect.x, rect.y, &text, width, &style);
                }
            }
        }
    }

    fn bounds(&self) -> Rect {
        self.table_rect()
    }
}
