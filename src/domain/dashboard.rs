use chrono::NaiveDate;

use crate::domain::announcements::{self, Announcement};
use crate::domain::maintenance::{self, RequestStatus};
use crate::domain::payments::{Payment, PAYMENTS};
use crate::domain::reservations::{Reservation, RESERVATIONS};
use crate::errors::ServerError;
use crate::store::Database;

/// Display-time fallback when the payments bucket has never been written.
const FALLBACK_BALANCE: f64 = 1250.00;

/// Read-only aggregation over all four buckets.
pub struct DashboardSummary {
    pub current_balance: f64,
    pub open_request_count: usize,
    pub unread_announcement_count: usize,
    pub upcoming_reservation_count: usize,
    pub recent_announcements: Vec<Announcement>,
    pub upcoming_reservations: Vec<Reservation>,
}

/// Reservations on or after `today`, with no status filter. This is a
/// different predicate from `reservations::upcoming`, which requires
/// confirmed status; the two are kept independently named on purpose.
fn reservations_on_or_after(reservations: &[Reservation], today: NaiveDate) -> Vec<&Reservation> {
    reservations.iter().filter(|r| r.date >= today).collect()
}

pub fn summarize(db: &Database, today: NaiveDate) -> Result<DashboardSummary, ServerError> {
    let requests = maintenance::list(db)?;
    // The dashboard reads payments with an empty default and falls back to a
    // display balance instead of seeding the bucket.
    let payments: Vec<Payment> = db.get_bucket(&PAYMENTS, Vec::new)?;
    let announcements = announcements::list(db)?;
    let reservations: Vec<Reservation> = db.get_bucket(&RESERVATIONS, Vec::new)?;

    let open_request_count = requests
        .iter()
        .filter(|r| matches!(r.status, RequestStatus::Pending | RequestStatus::InProgress))
        .count();

    let current_balance = payments
        .last()
        .map(|p| p.balance)
        .unwrap_or(FALLBACK_BALANCE);

    let on_or_after = reservations_on_or_after(&reservations, today);
    let upcoming_reservation_count = on_or_after.len();
    let upcoming_reservations: Vec<Reservation> =
        on_or_after.into_iter().take(3).cloned().collect();

    Ok(DashboardSummary {
        current_balance,
        open_request_count,
        unread_announcement_count: announcements::unread_count(&announcements),
        upcoming_reservation_count,
        recent_announcements: announcements.into_iter().take(3).collect(),
        upcoming_reservations,
    })
}
