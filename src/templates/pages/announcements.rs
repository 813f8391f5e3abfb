use maud::{html, Markup};

use crate::domain::announcements::{self, Announcement, Filter};
use crate::domain::Priority;
use crate::templates::pages::format_date;
use crate::templates::{badge, card, shell_layout, Flash, Tab};

fn priority_badge(priority: Priority) -> Markup {
    let tone = match priority {
        Priority::Low => "badge-plain",
        Priority::Medium => "badge-info",
        Priority::High => "badge-danger",
    };
    badge(tone, priority.as_str())
}

fn empty_copy(filter: Filter) -> &'static str {
    match filter {
        Filter::Unread => "You're all caught up! No unread announcements.",
        Filter::Pinned => "No pinned announcements at this time.",
        Filter::All => "Check back later for community updates.",
    }
}

pub fn announcements_page(
    announcements: &[Announcement],
    filter: Filter,
    flash: Option<&Flash>,
) -> Markup {
    let unread = announcements::unread_count(announcements);
    let visible = announcements::visible(announcements, filter);

    shell_layout(
        "News",
        Tab::Announcements,
        flash,
        html! {
            div class="page-header" {
                div {
                    h1 { "Announcements" }
                    p class="muted" { "Stay updated with community news" }
                }
                @if unread > 0 {
                    (badge("badge-info", &format!("{unread} unread")))
                }
            }

            nav class="filter-bar" {
                a href="/announcements" class=[(filter == Filter::All).then_some("active")] {
                    "All"
                }
                a href="/announcements?filter=unread"
                    class=[(filter == Filter::Unread).then_some("active")] {
                    "Unread (" (unread) ")"
                }
                a href="/announcements?filter=pinned"
                    class=[(filter == Filter::Pinned).then_some("active")] {
                    "Pinned"
                }
            }

            @if visible.is_empty() {
                section class="card empty-state" {
                    h3 { "No announcements" }
                    p class="muted" { (empty_copy(filter)) }
                }
            } @else {
                @for announcement in &visible {
                    @let card_class = if announcement.read { "card" } else { "card unread" };
                    section class=(card_class) {
                        div class="card-header" {
                            div {
                                p class="muted small" {
                                    @if announcement.pinned { "📌 " }
                                    span class="category" { (announcement.category.as_str()) }
                                    @if !announcement.read {
                                        span class="unread-dot" {}
                                    }
                                }
                                h3 { (announcement.title) }
                                p class="muted" { (format_date(announcement.date)) }
                            }
                            (priority_badge(announcement.priority))
                        }
                        p { (announcement.content) }
                        @if !announcement.read {
                            form action="/announcements/read" method="post" {
                                input type="hidden" name="id" value=(announcement.id);
                                input type="hidden" name="filter" value=(filter.as_str());
                                button type="submit" class="link-button" { "Mark as read" }
                            }
                        }
                    }
                }
            }

            @if unread > 0 {
                form action="/announcements/read-all" method="post" {
                    input type="hidden" name="filter" value=(filter.as_str());
                    button type="submit" class="wide" { "Mark All as Read" }
                }
            }

            (card("Categories", html! {
                div class="legend" {
                    span { "Maintenance" }
                    span { "Events" }
                    span { "Policy Updates" }
                    span { "Amenities" }
                }
            }))
        },
    )
}
