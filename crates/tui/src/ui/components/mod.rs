//! UI components: sidebar, top bar, and the section pages.

pub mod component;
pub mod pages;
pub mod sidebar;
pub mod top_bar;

pub use component::*;
pub use sidebar::SidebarComponent;
pub use top_bar::TopBarComponent;

use ratatui::layout::{Position, Rect};

/// Index of the first area containing the given terminal position, if any.
/// Used to map mouse clicks onto rendered rows and controls.
pub(crate) fn find_target_index_by_mouse_position(areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    areas.iter().position(|area| area.contains(Position::new(x, y)))
}
