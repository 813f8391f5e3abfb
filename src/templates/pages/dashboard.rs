use maud::{html, Markup};

use crate::domain::dashboard::DashboardSummary;
use crate::templates::pages::{format_date, format_money};
use crate::templates::{card, shell_layout, Flash, Tab};

pub fn dashboard_page(summary: &DashboardSummary, flash: Option<&Flash>) -> Markup {
    shell_layout(
        "Home",
        Tab::Dashboard,
        flash,
        html! {
            div class="page-header" {
                div {
                    h1 { "Welcome Home" }
                    p class="muted" { "Apartment 204B · Sunset Gardens" }
                }
            }

            div class="stat-grid" {
                section class="card stat" {
                    p class="stat-label" { "Rent Balance" }
                    p class="stat-value" { (format_money(summary.current_balance)) }
                }
                section class="card stat" {
                    p class="stat-label" { "Open Requests" }
                    p class="stat-value" { (summary.open_request_count) }
                }
            }

            (card("Recent Announcements", html! {
                @if summary.unread_announcement_count > 0 {
                    p class="muted" { (summary.unread_announcement_count) " new" }
                }
                @if summary.recent_announcements.is_empty() {
                    p class="empty" { "No announcements" }
                } @else {
                    ul class="list" {
                        @for announcement in &summary.recent_announcements {
                            li {
                                p {
                                    strong { (announcement.title) }
                                    @if !announcement.read {
                                        span class="unread-dot" {}
                                    }
                                }
                                p class="muted" { (announcement.content) }
                            }
                        }
                    }
                }
            }))

            (card("Upcoming Reservations", html! {
                @if summary.upcoming_reservations.is_empty() {
                    p class="empty" { "No upcoming reservations" }
                } @else {
                    ul class="list" {
                        @for reservation in &summary.upcoming_reservations {
                            li {
                                p { strong { (reservation.amenity_name) } }
                                p class="muted" {
                                    (format_date(reservation.date)) " at " (reservation.time)
                                }
                            }
                        }
                    }
                }
                p class="muted" { (summary.upcoming_reservation_count) " upcoming" }
            }))

            (card("Quick Actions", html! {
                div class="action-grid" {
                    a class="action" href="/maintenance" { "Report Issue" }
                    a class="action" href="/amenities" { "Book Amenity" }
                    a class="action" href="/payments" { "Pay Rent" }
                    a class="action" href="/contacts" { "Find Contacts" }
                }
            }))
        },
    )
}
