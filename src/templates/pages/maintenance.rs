use maud::{html, Markup};

use crate::domain::maintenance::{Category, MaintenanceRequest, RequestStatus};
use crate::domain::Priority;
use crate::templates::{badge, card, shell_layout, Flash, Tab};

fn status_badge(status: RequestStatus) -> Markup {
    let tone = match status {
        RequestStatus::Pending => "badge-plain",
        RequestStatus::InProgress => "badge-info",
        RequestStatus::Completed => "badge-ok",
        RequestStatus::Cancelled => "badge-danger",
    };
    badge(tone, status.as_str())
}

fn priority_badge(priority: Priority) -> Markup {
    let tone = match priority {
        Priority::Low => "badge-plain",
        Priority::Medium => "badge-info",
        Priority::High => "badge-danger",
    };
    badge(tone, &format!("{} priority", priority.as_str()))
}

pub fn maintenance_page(requests: &[MaintenanceRequest], flash: Option<&Flash>) -> Markup {
    shell_layout(
        "Repairs",
        Tab::Maintenance,
        flash,
        html! {
            div class="page-header" {
                div {
                    h1 { "Maintenance Requests" }
                    p class="muted" { "Submit and track repair requests" }
                }
            }

            (card("Submit Maintenance Request", request_form()))

            @if requests.is_empty() {
                section class="card empty-state" {
                    h3 { "No maintenance requests" }
                    p class="muted" { "When you submit a request, it will appear here." }
                }
            } @else {
                @for request in requests {
                    section class="card" {
                        div class="card-header" {
                            div {
                                h3 { (request.title) }
                                p class="muted" {
                                    "Request #" (request.id) " · " (request.category.label())
                                    @if let Some(location) = &request.location {
                                        " · " (location)
                                    }
                                }
                            }
                            div class="badges" {
                                (status_badge(request.status))
                                (priority_badge(request.priority))
                            }
                        }
                        p { (request.description) }
                        p class="muted small" {
                            "Submitted: " (request.date_submitted.format("%Y-%m-%d"))
                            " · Updated: " (request.date_updated.format("%Y-%m-%d"))
                        }
                    }
                }
            }
        },
    )
}

fn request_form() -> Markup {
    html! {
        form action="/maintenance/submit" method="post" class="stacked" {
            label for="title" { "Issue Title *" }
            input type="text" id="title" name="title" placeholder="Brief description of the issue";

            label for="category" { "Category *" }
            select id="category" name="category" {
                option value="" selected { "Select category" }
                @for category in Category::ALL {
                    option value=(category.as_str()) { (category.label()) }
                }
            }

            label for="priority" { "Priority" }
            select id="priority" name="priority" {
                option value="low" { "Low - Can wait a few days" }
                option value="medium" selected { "Medium - Within 24-48 hours" }
                option value="high" { "High - Urgent/Emergency" }
            }

            label for="location" { "Location" }
            input type="text" id="location" name="location"
                placeholder="e.g., Kitchen, Bathroom, Living Room";

            label for="description" { "Description *" }
            textarea id="description" name="description" rows="4"
                placeholder="Detailed description of the issue..." {}

            button type="submit" { "Submit Request" }
        }
    }
}
