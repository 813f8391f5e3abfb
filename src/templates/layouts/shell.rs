use maud::{html, Markup, DOCTYPE};

use crate::templates::components::flash::{flash_banner, Flash};

/// The six mutually exclusive tabs of the portal shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Maintenance,
    Payments,
    Announcements,
    Amenities,
    Contacts,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Maintenance,
        Tab::Payments,
        Tab::Announcements,
        Tab::Amenities,
        Tab::Contacts,
    ];

    pub fn href(self) -> &'static str {
        match self {
            Tab::Dashboard => "/",
            Tab::Maintenance => "/maintenance",
            Tab::Payments => "/payments",
            Tab::Announcements => "/announcements",
            Tab::Amenities => "/amenities",
            Tab::Contacts => "/contacts",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Home",
            Tab::Maintenance => "Repairs",
            Tab::Payments => "Payments",
            Tab::Announcements => "News",
            Tab::Amenities => "Book",
            Tab::Contacts => "Contacts",
        }
    }
}

pub fn shell_layout(title: &str, active: Tab, flash: Option<&Flash>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Sunset Gardens" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="topbar" {
                    h3 { "Sunset Gardens" }
                    nav class="tabs" {
                        ul {
                            @for tab in Tab::ALL {
                                li {
                                    a href=(tab.href()) class=[(tab == active).then_some("active")] {
                                        (tab.label())
                                    }
                                }
                            }
                        }
                    }
                }
                @if let Some(flash) = flash {
                    (flash_banner(flash))
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
