//! Section pages of the console.
//!
//! Each page owns its presentation and sample records; the shell only mounts
//! the page matching the active section. The mapping is an exhaustive match
//! over `Section`, so adding a section without a page fails to compile.

mod bookings;
mod dashboard;
mod drivers;
mod fleet;
mod maintenance;
mod payments;
mod reports;
mod users;

pub use bookings::BookingsPage;
pub use dashboard::DashboardPage;
pub use drivers::DriversPage;
pub use fleet::FleetPage;
pub use maintenance::MaintenancePage;
pub use payments::PaymentsPage;
pub use reports::ReportsPage;
pub use users::UsersPage;

use ratatui::style::Style;

use fleetdesk_types::Section;

use crate::ui::components::Component;
use crate::ui::theme::Theme;

/// All page components, constructed once per shell run.
#[derive(Debug, Default)]
pub struct Pages {
    dashboard: DashboardPage,
    bookings: BookingsPage,
    fleet: FleetPage,
    users: UsersPage,
    drivers: DriversPage,
    payments: PaymentsPage,
    maintenance: MaintenancePage,
    reports: ReportsPage,
}

impl Pages {
    /// The page component for a section.
    pub fn get_mut(&mut self, section: Section) -> &mut dyn Component {
        match section {
            Section::Dashboard => &mut self.dashboard,
            Section::Bookings => &mut self.bookings,
            Section::Fleet => &mut self.fleet,
            Section::Users => &mut self.users,
            Section::Drivers => &mut self.drivers,
            Section::Payments => &mut self.payments,
            Section::Maintenance => &mut self.maintenance,
            Section::Reports => &mut self.reports,
        }
    }
}

/// Shared status coloring for the tabular pages.
pub(crate) fn status_style<T: Theme + ?Sized>(theme: &T, status: &str) -> Style {
    match status {
        "Active" | "Available" | "Paid" | "Completed" | "Done" => theme.status_success(),
        "Upcoming" | "Reserved" | "Pending" | "Scheduled" | "In service" => theme.status_warning(),
        "Overdue" | "Failed" | "In workshop" | "Cancelled" => theme.status_error(),
        _ => theme.text_secondary_style(),
    }
}
