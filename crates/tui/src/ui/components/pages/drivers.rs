//! Driver profiles page. Not linked from the menu; reachable through the
//! `--section drivers` start flag.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

const DRIVERS: &[[&str; 4]] = &[
    ["Mila Okafor", "D1-4482-991", "2027-03-14", "4.9"],
    ["Jon Larsen", "D1-0261-547", "2026-11-02", "4.7"],
    ["Piotr Haddad", "D1-7730-128", "2028-06-21", "4.8"],
    ["Sofia Duarte", "D1-5519-204", "2026-09-30", "5.0"],
    ["Karel Novak", "D1-8846-373", "2029-01-12", "4.5"],
];

#[derive(Debug, Default)]
pub struct DriversPage;

impl Component for DriversPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let headers = ["Driver", "Licence no.", "Licence expiry", "Rating"]
            .into_iter()
            .map(|header| Cell::from(header).style(th::table_header_style(theme)));

        let rows = DRIVERS.iter().enumerate().map(|(index, driver)| {
            Row::new(driver.iter().map(|value| Cell::from(*value))).style(th::table_row_style(theme, index))
        });

        let widths = [
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
        ];
        let table = Table::new(rows, widths)
            .header(Row::new(headers).style(th::table_header_row_style(theme)))
            .column_spacing(1)
            .block(th::block(theme, None, false));
        frame.render_widget(table, area);
    }
}
