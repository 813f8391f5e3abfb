use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ServerError;
use crate::store::{next_record_id, BucketKey, Database};

pub const RESERVATIONS: BucketKey<Reservation> = BucketKey::new("reservations");

/// A bookable community facility. Capacity and hours are display-only; they
/// are not enforced against bookings.
pub struct Amenity {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub capacity: &'static str,
    pub hours: &'static str,
}

pub const AMENITIES: [Amenity; 5] = [
    Amenity {
        id: "gym",
        name: "Fitness Center",
        description: "Fully equipped gym with cardio and weight equipment",
        capacity: "8 people",
        hours: "5:00 AM - 11:00 PM",
    },
    Amenity {
        id: "pool",
        name: "Swimming Pool",
        description: "Outdoor heated pool with lounge area",
        capacity: "15 people",
        hours: "6:00 AM - 10:00 PM",
    },
    Amenity {
        id: "clubhouse",
        name: "Clubhouse",
        description: "Community room perfect for events and gatherings",
        capacity: "25 people",
        hours: "9:00 AM - 10:00 PM",
    },
    Amenity {
        id: "lounge",
        name: "Business Lounge",
        description: "Quiet workspace with WiFi and conference table",
        capacity: "6 people",
        hours: "24/7",
    },
    Amenity {
        id: "parking",
        name: "Guest Parking",
        description: "Reserved parking spaces for visitor vehicles",
        capacity: "3 spots",
        hours: "24/7",
    },
];

pub const TIME_SLOTS: [&str; 12] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM", "4:00 PM",
    "5:00 PM", "6:00 PM", "7:00 PM", "8:00 PM",
];

pub fn amenity_by_id(id: &str) -> Option<&'static Amenity> {
    AMENITIES.iter().find(|a| a.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
            ReservationStatus::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub amenity: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: u8,
    pub guests: u32,
    pub status: ReservationStatus,
    pub date_booked: DateTime<Utc>,
    /// Catalog name copied at booking time so history survives catalog edits.
    pub amenity_name: String,
}

/// Raw form input for a booking.
#[derive(Debug, Default)]
pub struct BookingForm {
    pub amenity: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub guests: String,
}

/// Book an amenity slot. Conflicts are exact matches on the
/// (amenity, date, time) triple among non-cancelled reservations; duration
/// is not considered, so a multi-hour booking leaves adjacent slots free.
pub fn book(db: &Database, form: &BookingForm) -> Result<Reservation, ServerError> {
    let amenity = form.amenity.trim();
    let time = form.time.trim();
    if amenity.is_empty() || form.date.trim().is_empty() || time.is_empty() {
        return Err(ServerError::Validation(
            "Please fill in all required fields".into(),
        ));
    }
    let date = NaiveDate::parse_from_str(form.date.trim(), "%Y-%m-%d")
        .map_err(|_| ServerError::Validation("Reservation date must be YYYY-MM-DD".into()))?;
    let duration: u8 = form
        .duration
        .trim()
        .parse()
        .ok()
        .filter(|d| (1..=4).contains(d))
        .unwrap_or(1);
    let guests: u32 = form.guests.trim().parse().unwrap_or(1);

    let reservations = db.get_bucket(&RESERVATIONS, Vec::new)?;
    let taken = reservations.iter().any(|r| {
        r.status != ReservationStatus::Cancelled
            && r.amenity == amenity
            && r.date == date
            && r.time == time
    });
    if taken {
        tracing::warn!(amenity, %date, time, "rejected double booking");
        return Err(ServerError::Conflict(
            "This time slot is already booked".into(),
        ));
    }

    let reservation = Reservation {
        id: next_record_id(),
        amenity: amenity.to_owned(),
        date,
        time: time.to_owned(),
        duration,
        guests,
        status: ReservationStatus::Confirmed,
        date_booked: Utc::now(),
        amenity_name: amenity_by_id(amenity)
            .map(|a| a.name.to_owned())
            .unwrap_or_else(|| amenity.to_owned()),
    };

    let mut all = reservations;
    all.push(reservation.clone());
    db.set_bucket(&RESERVATIONS, &all)?;

    Ok(reservation)
}

/// Cancel a reservation. Unknown ids are a silent no-op; cancelled
/// reservations stop participating in conflict checks.
pub fn cancel(db: &Database, id: i64) -> Result<(), ServerError> {
    db.update_bucket(&RESERVATIONS, Vec::new, |reservations| {
        for reservation in reservations.iter_mut() {
            if reservation.id == id {
                reservation.status = ReservationStatus::Cancelled;
            }
        }
    })?;
    Ok(())
}

/// All reservations in insertion order.
pub fn list(db: &Database) -> Result<Vec<Reservation>, ServerError> {
    db.get_bucket(&RESERVATIONS, Vec::new)
}

/// Confirmed reservations on or after `today`, ascending by date.
pub fn upcoming(reservations: &[Reservation], today: NaiveDate) -> Vec<&Reservation> {
    let mut out: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.status == ReservationStatus::Confirmed && r.date >= today)
        .collect();
    out.sort_by(|a, b| a.date.cmp(&b.date));
    out
}

/// Past or cancelled reservations, descending by date, capped at the five
/// most recent for display.
pub fn history(reservations: &[Reservation], today: NaiveDate) -> Vec<&Reservation> {
    let mut out: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.date < today || r.status == ReservationStatus::Cancelled)
        .collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out.truncate(5);
    out
}
