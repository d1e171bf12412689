//! Grid geometry and the drawer's fixed placement rules.
//!
//! Everything here works in document space: `x` grows right, `y` grows down,
//! and the page scroll offset is applied later when translating to the
//! viewport.

mod rect;

pub use rect::Rect;

use crate::component::Mount;
use crate::config::DrawerConfig;

/// What a point inside a table's bounds lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridHit {
    Cell { row: usize, column: usize },
    /// Inside the table, between cells.
    Spacing,
}

/// Cell size and spacing for a table.
///
/// Spacing separates cells from each other and from the table edge, like
/// `border-spacing` on an HTML table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    pub cell_width: u16,
    pub cell_height: u16,
    pub spacing: u16,
}

impl GridGeometry {
    pub fn from_config(config: &DrawerConfig) -> Self {
        Self {
            cell_width: config.cell_width.max(1),
            cell_height: config.cell_height.max(1),
            spacing: config.cell_spacing,
        }
    }

    fn column_stride(&self) -> i32 {
        self.cell_width as i32 + self.spacing as i32
    }

    fn row_stride(&self) -> i32 {
        self.cell_height as i32 + self.spacing as i32
    }

    /// Bounds of the whole table.
    pub fn table_rect(&self, origin: Mount, rows: usize, columns: usize) -> Rect {
        let spacing = self.spacing as i32;
        let width = spacing + columns as i32 * self.column_stride();
        let height = spacing + rows as i32 * self.row_stride();
        Rect::new(origin.x, origin.y, extent(width), extent(height))
    }

    /// Bounds of one cell.
    pub fn cell_rect(&self, origin: Mount, row: usize, column: usize) -> Rect {
        let spacing = self.spacing as i32;
        Rect::new(
            origin.x + spacing + column as i32 * self.column_stride(),
            origin.y + spacing + row as i32 * self.row_stride(),
            self.cell_width,
            self.cell_height,
        )
    }

    /// Bounds of a row: the full table width, the height of its cells.
    pub fn row_rect(&self, origin: Mount, row: usize, columns: usize) -> Rect {
        let table = self.table_rect(origin, 1, columns);
        let cell = self.cell_rect(origin, row, 0);
        Rect::new(table.x, cell.y, table.width, self.cell_height)
    }

    /// Locate a document-space point within a `rows` x `columns` table.
    pub fn locate(
        &self,
        origin: Mount,
        rows: usize,
        columns: usize,
        x: i32,
        y: i32,
    ) -> Option<GridHit> {
        if !self.table_rect(origin, rows, columns).contains(x, y) {
            return None;
        }

        let column = axis_index(
            x - origin.x - self.spacing as i32,
            self.column_stride(),
            self.cell_width,
            columns,
        );
        let row = axis_index(
            y - origin.y - self.spacing as i32,
            self.row_stride(),
            self.cell_height,
            rows,
        );

        match (row, column) {
            (Some(row), Some(column)) => Some(GridHit::Cell { row, column }),
            _ => Some(GridHit::Spacing),
        }
    }
}

/// Index of the cell covering `offset` along one axis, if it is not in a gap.
fn axis_index(offset: i32, stride: i32, size: u16, count: usize) -> Option<usize> {
    if offset < 0 || stride <= 0 {
        return None;
    }
    let index = (offset / stride) as usize;
    if index >= count || offset % stride >= size as i32 {
        return None;
    }
    Some(index)
}

fn extent(value: i32) -> u16 {
    value.clamp(0, u16::MAX as i32) as u16
}

/// Where each part of a drawer sits.
///
/// The delete-row button lives in a column left of the table and the
/// delete-column button in a row above it. Their free axis is driven by the
/// hovered cell, the other one is fixed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerLayout {
    pub table: Mount,
    pub del_row: Mount,
    pub del_col: Mount,
    pub add_row: Mount,
    pub add_col: Mount,
}

impl DrawerLayout {
    /// Top-left corner of the table for a drawer mounted at `origin`.
    pub fn table_origin(origin: Mount, button_width: u16) -> Mount {
        Mount::new(origin.x + button_width as i32 + 1, origin.y + 2)
    }

    /// Place the buttons around a table occupying `table`.
    pub fn compute(origin: Mount, table: Rect, button_width: u16) -> Self {
        let button_width = button_width as i32;
        let centered_x = table.x + (table.width as i32 - button_width).max(0) / 2;
        let centered_y = table.y + (table.height as i32 - 1).max(0) / 2;

        Self {
            table: Mount::new(table.x, table.y),
            del_row: Mount::new(origin.x, table.y),
            del_col: Mount::new(table.x, origin.y),
            add_row: Mount::new(centered_x, table.bottom() + 1),
            add_col: Mount::new(table.right() + 1, centered_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GridGeometry {
        GridGeometry {
            cell_width: 4,
            cell_height: 1,
            spacing: 1,
        }
    }

    #[test]
    fn test_locate_cells_and_gaps() {
        let origin = Mount::new(10, 5);
        let grid = geometry();

        // First cell starts one cell in from the table edge.
        assert_eq!(grid.locate(origin, 2, 2, 10, 5), Some(GridHit::Spacing));
        assert_eq!(
            grid.locate(origin, 2, 2, 11, 6),
            Some(GridHit::Cell { row: 0, column: 0 })
        );
        // Gap between column 0 and 1.
        assert_eq!(grid.locate(origin, 2, 2, 15, 6), Some(GridHit::Spacing));
        assert_eq!(
            grid.locate(origin, 2, 2, 16, 8),
            Some(GridHit::Cell { row: 1, column: 1 })
        );
        // Outside.
        assert_eq!(grid.locate(origin, 2, 2, 9, 6), None);
        assert_eq!(grid.locate(origin, 2, 2, 21, 6), None);
    }

    #[test]
    fn test_table_rect_grows_with_grid() {
        let grid = geometry();
        let rect = grid.table_rect(Mount::new(0, 0), 3, 2);
        assert_eq!(rect, Rect::new(0, 0, 11, 7));
        assert_eq!(grid.table_rect(Mount::new(0, 0), 0, 0), Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn test_row_rect_spans_table_width() {
        let grid = geometry();
        let row = grid.row_rect(Mount::new(3, 2), 1, 2);
        assert_eq!(row, Rect::new(3, 5, 11, 1));
    }
}
