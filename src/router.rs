use astra::Request;
use chrono::Local;
use std::collections::HashMap;
use std::io::Read;

use crate::domain::announcements::{self, Filter};
use crate::domain::maintenance::{self, NewRequest};
use crate::domain::payments::{self, PaymentForm};
use crate::domain::reservations::{self, BookingForm};
use crate::domain::{contacts, dashboard};
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, redirect_response, ResultResp};
use crate::store::Database;
use crate::templates::pages;
use crate::templates::Flash;

pub fn handle(mut req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    tracing::info!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") | ("GET", "/dashboard") => {
            let query = parse_query(&req);
            let summary = dashboard::summarize(db, Local::now().date_naive())?;
            html_response(pages::dashboard_page(&summary, flash_from(&query).as_ref()))
        }

        ("GET", "/maintenance") => {
            let query = parse_query(&req);
            let requests = maintenance::list(db)?;
            html_response(pages::maintenance_page(&requests, flash_from(&query).as_ref()))
        }
        ("POST", "/maintenance/submit") => {
            let form = parse_form(&mut req)?;
            let new_request = NewRequest {
                title: field(&form, "title"),
                description: field(&form, "description"),
                category: field(&form, "category"),
                priority: field(&form, "priority"),
                location: field(&form, "location"),
            };
            match maintenance::submit(db, &new_request) {
                Ok(_) => redirect_with_notice(
                    "/maintenance",
                    "Maintenance request submitted successfully!",
                ),
                Err(err) => redirect_rejection("/maintenance", err),
            }
        }

        ("GET", "/payments") => {
            let query = parse_query(&req);
            let payments = payments::list(db)?;
            html_response(pages::payments_page(&payments, flash_from(&query).as_ref()))
        }
        ("POST", "/payments/pay") => {
            let form = parse_form(&mut req)?;
            let payment = PaymentForm {
                amount: field(&form, "amount"),
                method: field(&form, "method"),
                date: field(&form, "date"),
            };
            match payments::pay(db, &payment) {
                Ok(_) => redirect_with_notice("/payments", "Payment processed successfully!"),
                Err(err) => redirect_rejection("/payments", err),
            }
        }

        ("GET", "/announcements") => {
            let query = parse_query(&req);
            let filter = Filter::parse(&field(&query, "filter"));
            let announcements = announcements::list(db)?;
            html_response(pages::announcements_page(
                &announcements,
                filter,
                flash_from(&query).as_ref(),
            ))
        }
        ("POST", "/announcements/read") => {
            let form = parse_form(&mut req)?;
            let id = parse_id(&form)?;
            announcements::mark_read(db, id)?;
            redirect_response(&announcements_path(&field(&form, "filter")))
        }
        ("POST", "/announcements/read-all") => {
            let form = parse_form(&mut req)?;
            announcements::mark_all_read(db)?;
            redirect_response(&announcements_path(&field(&form, "filter")))
        }

        ("GET", "/amenities") => {
            let query = parse_query(&req);
            let reservations = reservations::list(db)?;
            html_response(pages::amenities_page(
                &reservations,
                Local::now().date_naive(),
                flash_from(&query).as_ref(),
            ))
        }
        ("POST", "/amenities/book") => {
            let form = parse_form(&mut req)?;
            let booking = BookingForm {
                amenity: field(&form, "amenity"),
                date: field(&form, "date"),
                time: field(&form, "time"),
                duration: field(&form, "duration"),
                guests: field(&form, "guests"),
            };
            match reservations::book(db, &booking) {
                Ok(_) => redirect_with_notice("/amenities", "Reservation confirmed!"),
                Err(err) => redirect_rejection("/amenities", err),
            }
        }
        ("POST", "/amenities/cancel") => {
            let form = parse_form(&mut req)?;
            let id = parse_id(&form)?;
            reservations::cancel(db, id)?;
            redirect_with_notice("/amenities", "Reservation cancelled")
        }

        ("GET", "/contacts") => {
            let query = parse_query(&req);
            html_response(pages::contacts_page(
                &field(&query, "q"),
                &field(&query, "category"),
                flash_from(&query).as_ref(),
            ))
        }

        ("GET", "/static/main.css") => css_response(include_str!("../static/main.css")),

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => url::form_urlencoded::parse(q.as_bytes())
            .into_owned()
            .collect(),
        None => HashMap::new(),
    }
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable request body: {e}")))?;
    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}

fn field(fields: &HashMap<String, String>, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

fn parse_id(fields: &HashMap<String, String>) -> Result<i64, ServerError> {
    field(fields, "id")
        .parse()
        .map_err(|_| ServerError::BadRequest("missing or malformed id".into()))
}

/// Announcements redirects preserve the active filter.
fn announcements_path(filter: &str) -> String {
    match Filter::parse(filter) {
        Filter::All => "/announcements".into(),
        other => format!("/announcements?filter={}", other.as_str()),
    }
}

fn flash_from(query: &HashMap<String, String>) -> Option<Flash> {
    if let Some(msg) = query.get("error") {
        return Some(Flash::Error(msg.clone()));
    }
    query.get("notice").map(|msg| Flash::Notice(msg.clone()))
}

fn redirect_with_notice(path: &str, notice: &str) -> ResultResp {
    redirect_with_param(path, "notice", notice)
}

/// Validation and conflict rejections travel back to the page as an error
/// banner; anything else propagates to the error page.
fn redirect_rejection(path: &str, err: ServerError) -> ResultResp {
    match err {
        ServerError::Validation(msg) | ServerError::Conflict(msg) => {
            redirect_with_param(path, "error", &msg)
        }
        other => Err(other),
    }
}

fn redirect_with_param(path: &str, key: &str, value: &str) -> ResultResp {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(key, value)
        .finish();
    redirect_response(&format!("{path}?{query}"))
}
