pub mod amenities;
pub mod announcements;
pub mod contacts;
pub mod dashboard;
pub mod maintenance;
pub mod payments;

pub use amenities::amenities_page;
pub use announcements::announcements_page;
pub use contacts::contacts_page;
pub use dashboard::dashboard_page;
pub use maintenance::maintenance_page;
pub use payments::payments_page;

use chrono::NaiveDate;

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub(crate) fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}
