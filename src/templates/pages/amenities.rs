use chrono::NaiveDate;
use maud::{html, Markup};

use crate::domain::reservations::{
    self, Reservation, ReservationStatus, AMENITIES, TIME_SLOTS,
};
use crate::templates::pages::format_date;
use crate::templates::{badge, card, shell_layout, Flash, Tab};

fn status_badge(status: ReservationStatus) -> Markup {
    let tone = match status {
        ReservationStatus::Confirmed => "badge-ok",
        ReservationStatus::Cancelled => "badge-danger",
        ReservationStatus::Completed => "badge-plain",
    };
    badge(tone, status.as_str())
}

pub fn amenities_page(
    reservations: &[Reservation],
    today: NaiveDate,
    flash: Option<&Flash>,
) -> Markup {
    let upcoming = reservations::upcoming(reservations, today);
    let history = reservations::history(reservations, today);

    shell_layout(
        "Book",
        Tab::Amenities,
        flash,
        html! {
            div class="page-header" {
                div {
                    h1 { "Amenity Reservations" }
                    p class="muted" { "Book community facilities" }
                }
            }

            (card("Book an Amenity", booking_form(today)))

            (card("Available Amenities", html! {
                ul class="list" {
                    @for amenity in &AMENITIES {
                        li class="row" {
                            div {
                                p { strong { (amenity.name) } }
                                p class="muted" { (amenity.description) }
                                p class="muted small" { (amenity.capacity) " · " (amenity.hours) }
                            }
                        }
                    }
                }
            }))

            @if !upcoming.is_empty() {
                (card("Upcoming Reservations", html! {
                    ul class="list" {
                        @for reservation in &upcoming {
                            li class="row" {
                                div {
                                    p { strong { (reservation.amenity_name) } }
                                    p class="muted" {
                                        (format_date(reservation.date)) " at " (reservation.time)
                                    }
                                    p class="muted small" {
                                        (reservation.duration) " hour(s) · "
                                        (reservation.guests) " guest(s)"
                                    }
                                }
                                div class="badges" {
                                    (status_badge(reservation.status))
                                    form action="/amenities/cancel" method="post" {
                                        input type="hidden" name="id" value=(reservation.id);
                                        button type="submit" class="link-button" { "Cancel" }
                                    }
                                }
                            }
                        }
                    }
                }))
            }

            @if !history.is_empty() {
                (card("Reservation History", html! {
                    ul class="list" {
                        @for reservation in &history {
                            li class="row" {
                                div {
                                    p { strong { (reservation.amenity_name) } }
                                    p class="muted" {
                                        (format_date(reservation.date)) " at " (reservation.time)
                                    }
                                }
                                (status_badge(reservation.status))
                            }
                        }
                    }
                }))
            }

            (card("Booking Guidelines", html! {
                div class="info-block" {
                    h4 { "General Rules" }
                    ul class="muted" {
                        li { "Reservations can be made up to 30 days in advance" }
                        li { "Maximum of 4 hours per reservation" }
                        li { "Cancel at least 24 hours in advance to avoid fees" }
                        li { "Clean up after use and report any damage" }
                    }
                }
                div class="info-block" {
                    h4 { "Contact Information" }
                    p class="muted" {
                        "For special events or questions about amenities, contact the \
                         leasing office at (555) 123-4567."
                    }
                }
            }))
        },
    )
}

fn booking_form(today: NaiveDate) -> Markup {
    html! {
        form action="/amenities/book" method="post" class="stacked" {
            label for="amenity" { "Amenity *" }
            select id="amenity" name="amenity" {
                option value="" selected { "Select amenity" }
                @for amenity in &AMENITIES {
                    option value=(amenity.id) { (amenity.name) }
                }
            }

            div class="form-row" {
                div {
                    label for="date" { "Date *" }
                    input type="date" id="date" name="date" min=(today.format("%Y-%m-%d"));
                }
                div {
                    label for="time" { "Time *" }
                    select id="time" name="time" {
                        option value="" selected { "Select time" }
                        @for slot in TIME_SLOTS {
                            option value=(slot) { (slot) }
                        }
                    }
                }
            }

            div class="form-row" {
                div {
                    label for="duration" { "Duration (hours)" }
                    select id="duration" name="duration" {
                        option value="1" selected { "1 hour" }
                        option value="2" { "2 hours" }
                        option value="3" { "3 hours" }
                        option value="4" { "4 hours" }
                    }
                }
                div {
                    label for="guests" { "Number of Guests" }
                    input type="number" id="guests" name="guests" min="1" max="25" value="1";
                }
            }

            button type="submit" { "Confirm Reservation" }
        }
    }
}
