//! Fleet management page: the vehicle inventory.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, Table},
};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::components::pages::status_style;
use crate::ui::theme::theme_helpers as th;

const VEHICLES: &[[&str; 5]] = &[
    ["B-FD 2041", "VW Golf", "Compact", "48,210 km", "Active"],
    ["B-FD 1187", "Renault Clio", "Economy", "61,540 km", "Available"],
    ["B-FD 3302", "BMW X1", "SUV", "32,880 km", "Active"],
    ["B-FD 4410", "Tesla Model 3", "Electric", "27,105 km", "In workshop"],
    ["B-FD 0923", "Fiat 500", "Economy", "74,990 km", "Reserved"],
    ["B-FD 2788", "VW Passat", "Midsize", "88,320 km", "Active"],
    ["B-FD 5104", "Toyota Corolla", "Compact", "12,450 km", "Available"],
];

#[derive(Debug, Default)]
pub struct FleetPage;

impl Component for FleetPage {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.theme;
        let headers = ["Plate", "Model", "Class", "Odometer", "Status"]
            .into_iter()
            .map(|header| Cell::from(header).style(th::table_header_style(theme)));

        let rows = VEHICLES.iter().enumerate().map(|(index, vehicle)| {
            let mut cells: Vec<Cell> = vehicle[..4].iter().map(|value| Cell::from(*value)).collect();
            cells.push(Cell::from(vehicle[4]).style(status_style(theme, vehicle[4])));
            Row::new(cells).style(th::table_row_style(theme, index))
        });

        let widths = [
            Constraint::Length(10),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Length(12),
        ];
        let table = Table::new(rows, widths)
            .header(Row::new(headers).style(th::table_header_row_style(theme)))
            .column_spacing(1)
            .block(th::block(theme, None, false));
        frame.render_widget(table, area);
    }
}
