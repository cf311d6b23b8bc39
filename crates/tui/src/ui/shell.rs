//! The composed console shell: sidebar, top bar, content header, active
//! page, and the hints line.
//!
//! `ShellView` owns the component instances and routes input to whichever
//! region should see it; all state lives in `App`. While the session is
//! unresolved the shell renders only a loading placeholder, which also
//! covers the transient frame before an unauthorized run hands control back
//! to the sign-in boundary.

use chrono::Local;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use fleetdesk_types::{Effect, Msg};

use crate::app::{App, Phase};
use crate::ui::components::pages::Pages;
use crate::ui::components::{Component, SidebarComponent, TopBarComponent};
use crate::ui::theme::theme_helpers as th;

#[derive(Debug, Default)]
pub struct ShellView {
    sidebar: SidebarComponent,
    top_bar: TopBarComponent,
    pages: Pages,
}

impl ShellView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes a terminal event to the owning component and collects the
    /// resulting effects.
    pub fn handle_event(&mut self, app: &mut App, event: Event) -> Vec<Effect> {
        match event {
            Event::Key(key) => self.handle_key_events(app, key),
            Event::Mouse(mouse) => self.handle_mouse_events(app, mouse),
            Event::Resize(width, height) => app.update(Msg::Resize(width, height)),
            _ => Vec::new(),
        }
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('b') => return app.update(Msg::ToggleSidebar),
                KeyCode::Char('q') => return app.update(Msg::LogoutRequested),
                _ => {}
            }
        }
        self.sidebar.handle_key_events(app, key)
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = self.sidebar.handle_mouse_events(app, mouse);
        effects.extend(self.top_bar.handle_mouse_events(app, mouse));
        effects
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let background = Paragraph::new("").style(Style::default().bg(app.theme.roles().background));
        frame.render_widget(background, area);

        if app.phase == Phase::Loading {
            self.render_loading(frame, area, app);
            return;
        }

        let columns = Layout::horizontal([
            Constraint::Length(SidebarComponent::width(app.sidebar.open)),
            Constraint::Min(1),
        ])
        .split(area);
        let content_rows = Layout::vertical([
            Constraint::Length(2), // top bar
            Constraint::Length(2), // content header
            Constraint::Min(1),    // page
            Constraint::Length(1), // hints
        ])
        .split(columns[1]);

        self.sidebar.render(frame, columns[0], app);
        self.top_bar.render(frame, content_rows[0], app);
        self.render_header(frame, content_rows[1], app);
        self.pages.get_mut(app.active_section).render(frame, content_rows[2], app);
        self.render_hints(frame, content_rows[3], app);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect, app: &App) {
        let rows = Layout::vertical([
            Constraint::Percentage(50),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
        let placeholder = Paragraph::new("Loading…").centered().style(app.theme.text_muted_style());
        frame.render_widget(placeholder, rows[1]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, app: &App) {
        let theme = &*app.theme;
        let updated = format!("Updated {} ", Local::now().format("%b %e, %H:%M"));
        let chunks = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(updated.chars().count() as u16),
        ])
        .split(area);

        let title = Paragraph::new(format!(" {}", app.active_section.title())).style(theme.accent_emphasis_style());
        frame.render_widget(title, chunks[0]);
        frame.render_widget(Paragraph::new(updated).style(theme.text_muted_style()), chunks[1]);
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect, app: &App) {
        let spans = th::build_hint_spans(
            &*app.theme,
            &[
                (" ↑/↓", " Navigate "),
                ("Enter", " Open "),
                ("Ctrl+B", " Sidebar "),
                ("Ctrl+Q", " Logout "),
                ("Ctrl+C", " Quit"),
            ],
        );
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
