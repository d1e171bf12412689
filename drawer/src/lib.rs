pub mod buffer;
pub mod button;
pub mod component;
pub mod config;
pub mod controls;
pub mod drawer;
pub mod error;
pub mod event;
pub mod layout;
pub mod page;
pub mod registry;
pub mod render;
pub mod table;
pub mod terminal;
pub mod theme;
pub mod timer;

pub use buffer::Buffer;
pub use button::{Button, Role};
pub use component::{Component, EventContext, EventResult, Frame, Mount};
pub use config::DrawerConfig;
pub use controls::ManageControls;
pub use drawer::Drawer;
pub use error::{RegistryError, TableError};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use layout::Rect;
pub use page::Page;
pub use registry::{registry, Attributes, Registry};
pub use table::{HoverTarget, Table};
pub use terminal::Terminal;
pub use theme::{ClassStyle, Color, Rgb, Theme};
pub use timer::HideTimer;
