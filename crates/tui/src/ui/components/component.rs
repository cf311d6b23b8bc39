//! Component abstraction for the console UI.
//!
//! Components are self-contained UI regions that handle their own input and
//! rendering while reporting state changes to the shell through messages and
//! effects. State itself lives in `App`; components read it during render
//! and route user input back through `App::update`.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;

use fleetdesk_types::Effect;

use crate::app::App;

/// A UI region with its own input handling and rendering.
///
/// Event handlers run only when the shell routes an event to the component;
/// `render` must stay side-effect free apart from frame drawing and the hit
/// areas it records on `App` for mouse dispatch.
pub(crate) trait Component {
    /// Handle a key event routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App);
}
