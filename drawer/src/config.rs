//! Drawer configuration.

use std::time::Duration;

/// Sizes and timings for a drawer and its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawerConfig {
    /// Rows appended when a table is first attached.
    pub initial_rows: usize,

    /// Columns appended when a table is first attached.
    pub initial_columns: usize,

    /// How long a delete button lingers after being told to hide.
    pub hide_delay: Duration,

    /// Cell width in terminal columns.
    pub cell_width: u16,

    /// Cell height in terminal rows.
    pub cell_height: u16,

    /// Gap between cells, and between cells and the table edge.
    pub cell_spacing: u16,

    /// Width of every button.
    pub button_width: u16,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            initial_rows: 4,
            initial_columns: 4,
            hide_delay: Duration::from_millis(150),
            cell_width: 8,
            cell_height: 1,
            cell_spacing: 1,
            button_width: 3,
        }
    }
}

impl DrawerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial grid size.
    pub fn grid(mut self, rows: usize, columns: usize) -> Self {
        self.initial_rows = rows;
        self.initial_columns = columns;
        self
    }

    /// Set the delete button hide delay.
    pub fn hide_delay(mut self, delay: Duration) -> Self {
        self.hide_delay = delay;
        self
    }

    /// Set the cell size.
    pub fn cell_size(mut self, width: u16, height: u16) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    pub fn cell_spacing(mut self, spacing: u16) -> Self {
        self.cell_spacing = spacing;
        self
    }

    pub fn button_width(mut self, width: u16) -> Self {
        self.button_width = width;
        self
    }
}
