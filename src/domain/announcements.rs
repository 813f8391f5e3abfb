use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Priority;
use crate::errors::ServerError;
use crate::store::{BucketKey, Database};

pub const ANNOUNCEMENTS: BucketKey<Announcement> = BucketKey::new("announcements");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementCategory {
    Maintenance,
    Event,
    Policy,
    Amenity,
}

impl AnnouncementCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            AnnouncementCategory::Maintenance => "maintenance",
            AnnouncementCategory::Event => "event",
            AnnouncementCategory::Policy => "policy",
            AnnouncementCategory::Amenity => "amenity",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub priority: Priority,
    pub category: AnnouncementCategory,
    pub read: bool,
    pub pinned: bool,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The five default community announcements the bucket starts with.
pub fn seed() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "Pool Maintenance Scheduled".into(),
            content: "The community pool will be closed for routine maintenance this Friday, \
                      January 19th from 8:00 AM to 12:00 PM. We apologize for any inconvenience \
                      and appreciate your patience as we work to keep our facilities in \
                      excellent condition."
                .into(),
            date: date(2024, 1, 15),
            priority: Priority::Medium,
            category: AnnouncementCategory::Maintenance,
            read: false,
            pinned: true,
        },
        Announcement {
            id: 2,
            title: "New Fitness Equipment Installed".into(),
            content: "We're excited to announce that new cardio equipment has been installed in \
                      the fitness center! Come check out the latest treadmills and elliptical \
                      machines. The fitness center is open daily from 5:00 AM to 11:00 PM."
                .into(),
            date: date(2024, 1, 12),
            priority: Priority::Low,
            category: AnnouncementCategory::Amenity,
            read: false,
            pinned: false,
        },
        Announcement {
            id: 3,
            title: "Package Delivery Policy Update".into(),
            content: "Effective February 1st, 2024, we will be implementing a new package \
                      delivery system. All packages will be held at the front desk for pickup. \
                      Residents will receive email notifications when packages arrive. Please \
                      bring a valid ID when picking up packages."
                .into(),
            date: date(2024, 1, 10),
            priority: Priority::High,
            category: AnnouncementCategory::Policy,
            read: true,
            pinned: false,
        },
        Announcement {
            id: 4,
            title: "Community BBQ Event".into(),
            content: "Join us for our monthly community BBQ on Saturday, January 27th from \
                      2:00 PM to 5:00 PM at the pool area. Food and drinks will be provided. \
                      This is a great opportunity to meet your neighbors and enjoy some \
                      delicious food!"
                .into(),
            date: date(2024, 1, 8),
            priority: Priority::Low,
            category: AnnouncementCategory::Event,
            read: true,
            pinned: false,
        },
        Announcement {
            id: 5,
            title: "Parking Lot Repainting".into(),
            content: "The parking lot will be restriped next week. Please move your vehicles to \
                      the temporary parking area behind the building. Work will begin Monday at \
                      7:00 AM and is expected to complete by Wednesday evening."
                .into(),
            date: date(2024, 1, 5),
            priority: Priority::High,
            category: AnnouncementCategory::Maintenance,
            read: true,
            pinned: false,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Unread,
    Pinned,
}

impl Filter {
    pub fn parse(value: &str) -> Self {
        match value {
            "unread" => Filter::Unread,
            "pinned" => Filter::Pinned,
            _ => Filter::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Unread => "unread",
            Filter::Pinned => "pinned",
        }
    }
}

/// All announcements in storage order, seeding defaults on first read.
pub fn list(db: &Database) -> Result<Vec<Announcement>, ServerError> {
    db.get_bucket(&ANNOUNCEMENTS, seed)
}

/// Mark a single announcement read. Idempotent; unknown ids are a no-op.
pub fn mark_read(db: &Database, id: i64) -> Result<(), ServerError> {
    db.update_bucket(&ANNOUNCEMENTS, seed, |announcements| {
        for announcement in announcements.iter_mut() {
            if announcement.id == id {
                announcement.read = true;
            }
        }
    })?;
    Ok(())
}

/// Mark every announcement read.
pub fn mark_all_read(db: &Database) -> Result<(), ServerError> {
    db.update_bucket(&ANNOUNCEMENTS, seed, |announcements| {
        for announcement in announcements.iter_mut() {
            announcement.read = true;
        }
    })?;
    Ok(())
}

/// Apply a filter mode, then order pinned records first with date descending
/// within both groups. The sort is stable, so equal dates keep insertion
/// order.
pub fn visible(announcements: &[Announcement], filter: Filter) -> Vec<&Announcement> {
    let mut out: Vec<&Announcement> = announcements
        .iter()
        .filter(|a| match filter {
            Filter::All => true,
            Filter::Unread => !a.read,
            Filter::Pinned => a.pinned,
        })
        .collect();
    out.sort_by(|a, b| b.pinned.cmp(&a.pinned).then(b.date.cmp(&a.date)));
    out
}

pub fn unread_count(announcements: &[Announcement]) -> usize {
    announcements.iter().filter(|a| !a.read).count()
}
