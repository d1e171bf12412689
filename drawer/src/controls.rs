/// Tells the drawer where the delete controls belong.
///
/// Emitted by a table whenever the hovered target changes. `pos_x` is the
/// left edge of the hovered cell and `pos_y` the document-space top of its
/// row. A hide request carries no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManageControls {
    pub visible: bool,
    pub pos_x: Option<i32>,
    pub pos_y: Option<i32>,
}

impl ManageControls {
    pub fn show(pos_x: Option<i32>, pos_y: Option<i32>) -> Self {
        Self {
            visible: true,
            pos_x,
            pos_y,
        }
    }

    pub fn hide() -> Self {
        Self {
            visible: false,
            pos_x: None,
            pos_y: None,
        }
    }
}
