//! Static reference data for the contact directory. There are no mutation
//! operations; search and category filters compose over this table.

pub struct Contact {
    pub id: u32,
    pub category: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub phone: &'static str,
    pub email: Option<&'static str>,
    pub hours: &'static str,
    pub description: &'static str,
    pub urgent: bool,
}

pub struct ContactCategory {
    pub id: &'static str,
    pub name: &'static str,
}

pub const CATEGORIES: [ContactCategory; 7] = [
    ContactCategory { id: "emergency", name: "Emergency" },
    ContactCategory { id: "property", name: "Property Management" },
    ContactCategory { id: "maintenance", name: "Maintenance" },
    ContactCategory { id: "security", name: "Security" },
    ContactCategory { id: "services", name: "Resident Services" },
    ContactCategory { id: "local", name: "Local Services" },
    ContactCategory { id: "utilities", name: "Utilities" },
];

pub const CONTACTS: [Contact; 14] = [
    Contact {
        id: 1,
        category: "emergency",
        name: "Emergency Services",
        title: "911",
        phone: "911",
        email: None,
        hours: "24/7",
        description: "Police, Fire, Medical Emergency",
        urgent: true,
    },
    Contact {
        id: 2,
        category: "emergency",
        name: "Poison Control",
        title: "National Poison Control",
        phone: "1-800-222-1222",
        email: None,
        hours: "24/7",
        description: "Poison emergency assistance",
        urgent: true,
    },
    Contact {
        id: 3,
        category: "property",
        name: "Leasing Office",
        title: "Main Office",
        phone: "(555) 123-4567",
        email: Some("office@sunsetgardens.com"),
        hours: "Mon-Fri 9AM-6PM, Sat 10AM-4PM",
        description: "General inquiries, leasing, renewals",
        urgent: false,
    },
    Contact {
        id: 4,
        category: "property",
        name: "Property Manager",
        title: "Sarah Johnson",
        phone: "(555) 123-4568",
        email: Some("sarah.johnson@sunsetgardens.com"),
        hours: "Mon-Fri 9AM-5PM",
        description: "Property management, resident concerns",
        urgent: false,
    },
    Contact {
        id: 5,
        category: "maintenance",
        name: "Maintenance Emergency",
        title: "24/7 Emergency Line",
        phone: "(555) 123-4569",
        email: Some("emergency@sunsetgardens.com"),
        hours: "24/7",
        description: "Water leaks, power outages, lockouts",
        urgent: true,
    },
    Contact {
        id: 6,
        category: "maintenance",
        name: "Maintenance Office",
        title: "Non-Emergency Repairs",
        phone: "(555) 123-4570",
        email: Some("maintenance@sunsetgardens.com"),
        hours: "Mon-Fri 8AM-5PM",
        description: "General repairs and maintenance requests",
        urgent: false,
    },
    Contact {
        id: 7,
        category: "security",
        name: "Security Office",
        title: "Building Security",
        phone: "(555) 123-4571",
        email: Some("security@sunsetgardens.com"),
        hours: "24/7",
        description: "Security concerns, gate access, visitor issues",
        urgent: false,
    },
    Contact {
        id: 8,
        category: "services",
        name: "Concierge",
        title: "Resident Services",
        phone: "(555) 123-4572",
        email: Some("concierge@sunsetgardens.com"),
        hours: "Mon-Fri 8AM-8PM, Weekends 10AM-6PM",
        description: "Package pickup, amenity reservations, general assistance",
        urgent: false,
    },
    Contact {
        id: 9,
        category: "local",
        name: "City Hospital",
        title: "Sunrise Medical Center",
        phone: "(555) 789-0123",
        email: None,
        hours: "24/7",
        description: "2.5 miles away - Full service hospital",
        urgent: false,
    },
    Contact {
        id: 10,
        category: "local",
        name: "Pharmacy",
        title: "RxPlus Pharmacy",
        phone: "(555) 789-0124",
        email: None,
        hours: "Mon-Fri 8AM-10PM, Weekends 9AM-9PM",
        description: "0.3 miles away - Prescription and over-the-counter",
        urgent: false,
    },
    Contact {
        id: 11,
        category: "local",
        name: "Police (Non-Emergency)",
        title: "Metro Police Department",
        phone: "(555) 789-0125",
        email: None,
        hours: "24/7",
        description: "Non-emergency police matters",
        urgent: false,
    },
    Contact {
        id: 12,
        category: "utilities",
        name: "Electric Company",
        title: "Metro Electric",
        phone: "1-800-555-POWER",
        email: Some("service@metroelectric.com"),
        hours: "24/7",
        description: "Power outages and electrical service",
        urgent: false,
    },
    Contact {
        id: 13,
        category: "utilities",
        name: "Gas Company",
        title: "City Gas & Energy",
        phone: "1-800-555-GAS1",
        email: None,
        hours: "24/7",
        description: "Gas leaks and service issues",
        urgent: false,
    },
    Contact {
        id: 14,
        category: "utilities",
        name: "Water Department",
        title: "Municipal Water",
        phone: "(555) 789-0130",
        email: Some("water@cityservices.gov"),
        hours: "Mon-Fri 7AM-4PM",
        description: "Water service and billing",
        urgent: false,
    },
];

/// Case-insensitive substring search across name, title, and description
/// (a contact matches if any field contains the term), composed with an
/// exact category filter ("all" disables it).
pub fn search(term: &str, category: &str) -> Vec<&'static Contact> {
    let needle = term.trim().to_lowercase();
    CONTACTS
        .iter()
        .filter(|c| {
            let matches_search = needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.title.to_lowercase().contains(&needle)
                || c.description.to_lowercase().contains(&needle);
            let matches_category = category == "all" || category.is_empty() || c.category == category;
            matches_search && matches_category
        })
        .collect()
}

/// Contacts flagged for the emergency quick-access card.
pub fn emergency() -> impl Iterator<Item = &'static Contact> {
    CONTACTS.iter().filter(|c| c.urgent)
}
