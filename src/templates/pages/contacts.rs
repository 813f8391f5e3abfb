use maud::{html, Markup};

use crate::domain::contacts::{self, Contact, CATEGORIES};
use crate::templates::{badge, card, shell_layout, Flash, Tab};

pub fn contacts_page(search_term: &str, category: &str, flash: Option<&Flash>) -> Markup {
    let results = contacts::search(search_term, category);

    shell_layout(
        "Contacts",
        Tab::Contacts,
        flash,
        html! {
            div class="page-header" {
                div {
                    h1 { "Contact Directory" }
                    p class="muted" { "Important numbers and contacts" }
                }
            }

            section class="card emergency" {
                h2 { "Emergency Contacts" }
                ul class="list" {
                    @for contact in contacts::emergency() {
                        li class="row" {
                            div {
                                p { strong { (contact.name) } }
                                p class="muted" { (contact.description) }
                            }
                            a class="button danger" href={ "tel:" (contact.phone) } { "Call" }
                        }
                    }
                }
            }

            form action="/contacts" method="get" class="search-bar" {
                input type="search" name="q" value=(search_term) placeholder="Search contacts...";
                button type="submit" { "Search" }
            }

            nav class="filter-bar" {
                a href="/contacts" class=[(category.is_empty() || category == "all").then_some("active")] {
                    "All"
                }
                @for cat in &CATEGORIES {
                    a href={ "/contacts?category=" (cat.id) }
                        class=[(category == cat.id).then_some("active")] {
                        (cat.name)
                    }
                }
            }

            @if results.is_empty() {
                section class="card empty-state" {
                    h3 { "No contacts found" }
                    p class="muted" { "Try adjusting your search or category filter." }
                }
            } @else {
                @for cat in &CATEGORIES {
                    @let group: Vec<&Contact> =
                        results.iter().copied().filter(|c| c.category == cat.id).collect();
                    @if !group.is_empty() {
                        (card(cat.name, html! {
                            @for contact in group {
                                div class="contact" {
                                    p {
                                        strong { (contact.name) }
                                        @if contact.urgent {
                                            " " (badge("badge-danger", "Emergency"))
                                        }
                                    }
                                    p class="muted" { (contact.title) }
                                    p class="muted" { (contact.description) }
                                    p class="muted small" { (contact.hours) }
                                    div class="contact-actions" {
                                        a class="button" href={ "tel:" (contact.phone) } {
                                            (contact.phone)
                                        }
                                        @if let Some(email) = contact.email {
                                            a class="button" href={ "mailto:" (email) } { "Email" }
                                        }
                                    }
                                }
                            }
                        }))
                    }
                }
            }

            (card("Important Information", html! {
                div class="info-block" {
                    h4 { "Property Address" }
                    p class="muted" {
                        "Sunset Gardens Apartments" br;
                        "1234 Sunset Boulevard" br;
                        "Sunshine City, SC 12345"
                    }
                }
                div class="info-block" {
                    h4 { "After Hours" }
                    p class="muted" {
                        "For maintenance emergencies after business hours, call the emergency \
                         maintenance line. For all other inquiries, please contact the leasing \
                         office during business hours."
                    }
                }
                div class="info-block" {
                    h4 { "Emergency Procedures" }
                    p class="muted" {
                        "In case of fire, earthquake, or other emergency, follow posted \
                         evacuation procedures. Assembly point is located in the main parking \
                         lot."
                    }
                }
            }))
        },
    )
}
