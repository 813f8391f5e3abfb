use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Priority;
use crate::errors::ServerError;
use crate::store::{next_record_id, BucketKey, Database};

pub const MAINTENANCE_REQUESTS: BucketKey<MaintenanceRequest> =
    BucketKey::new("maintenance-requests");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Plumbing,
    Electrical,
    Hvac,
    Appliance,
    PestControl,
    LocksKeys,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Plumbing,
        Category::Electrical,
        Category::Hvac,
        Category::Appliance,
        Category::PestControl,
        Category::LocksKeys,
        Category::Other,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "plumbing" => Some(Category::Plumbing),
            "electrical" => Some(Category::Electrical),
            "hvac" => Some(Category::Hvac),
            "appliance" => Some(Category::Appliance),
            "pest-control" => Some(Category::PestControl),
            "locks-keys" => Some(Category::LocksKeys),
            "other" => Some(Category::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Plumbing => "plumbing",
            Category::Electrical => "electrical",
            Category::Hvac => "hvac",
            Category::Appliance => "appliance",
            Category::PestControl => "pest-control",
            Category::LocksKeys => "locks-keys",
            Category::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Plumbing => "Plumbing",
            Category::Electrical => "Electrical",
            Category::Hvac => "HVAC",
            Category::Appliance => "Appliance",
            Category::PestControl => "Pest Control",
            Category::LocksKeys => "Locks & Keys",
            Category::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::InProgress => "in-progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: RequestStatus,
    pub date_submitted: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

/// Raw form input for a new request.
#[derive(Debug, Default)]
pub struct NewRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub location: String,
}

/// Append a new request with status pending and both date fields set to the
/// submission time. No side effect on validation failure.
pub fn submit(db: &Database, form: &NewRequest) -> Result<MaintenanceRequest, ServerError> {
    let title = form.title.trim();
    let description = form.description.trim();
    if title.is_empty() || description.is_empty() || form.category.trim().is_empty() {
        return Err(ServerError::Validation(
            "Please fill in all required fields".into(),
        ));
    }
    let category = Category::parse(form.category.trim()).ok_or_else(|| {
        ServerError::Validation("Please fill in all required fields".into())
    })?;
    let priority = Priority::parse(form.priority.trim()).unwrap_or(Priority::Medium);
    let location = match form.location.trim() {
        "" => None,
        loc => Some(loc.to_owned()),
    };

    let now = Utc::now();
    let request = MaintenanceRequest {
        id: next_record_id(),
        title: title.to_owned(),
        description: description.to_owned(),
        category,
        priority,
        location,
        status: RequestStatus::Pending,
        date_submitted: now,
        date_updated: now,
    };

    db.update_bucket(&MAINTENANCE_REQUESTS, Vec::new, |requests| {
        requests.push(request.clone());
    })?;

    Ok(request)
}

/// All requests, in insertion order, newest last.
pub fn list(db: &Database) -> Result<Vec<MaintenanceRequest>, ServerError> {
    db.get_bucket(&MAINTENANCE_REQUESTS, Vec::new)
}
