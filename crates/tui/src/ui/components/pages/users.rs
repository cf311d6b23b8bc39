//! Users page: platform accounts. Reached through the menu only by super
//! admins; the menu derivation owns that gate, not this page.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

const USERS: &[[&str; 3]] = &[
    ["Avery Quinn", "avery@fleetdesk.example", "superAdmin"],
    ["Noor El-Sayed", "noor@fleetdesk.example", "admin"],
    ["Jonas Weber", "jonas@fleetdesk.example", "admin"],
    ["Mila Okafor", "mila.okafor@mailbox.example", "customer"],
    ["Piotr Haddad", "p.haddad@mailbox.example", "customer"],
    ["Tove Eriksen", "tove.e@mailbox.example", "agent"],
];

#[derive(Debug, Default)]
pub struct UsersPage;

impl Component for UsersPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let headers = ["Name", "Email", "Role"]
            .into_iter()
            .map(|header| Cell::from(header).style(th::table_header_style(theme)));

        let rows = USERS.iter().enumerate().map(|(index, user)| {
            let role_style = if user[2] == "superAdmin" {
                theme.accent_primary_style()
            } else {
                theme.text_secondary_style()
            };
            Row::new(vec![
                Cell::from(user[0]),
                Cell::from(user[1]),
                Cell::from(user[2]).style(role_style),
            ])
            .style(th::table_row_style(theme, index))
        });

        let widths = [
            Constraint::Percentage(30),
            Constraint::Percentage(50),
            Constraint::Percentage(20),
        ];
        let table = Table::new(rows, widths)
            .header(Row::new(headers).style(th::table_header_row_style(theme)))
            .column_spacing(1)
            .block(th::block(theme, None, false));
        frame.render_widget(table, area);
    }
}
