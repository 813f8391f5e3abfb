use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ServerError;
use crate::store::{next_record_id, BucketKey, Database};

pub const PAYMENTS: BucketKey<Payment> = BucketKey::new("payments");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Overdue => "overdue",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Rent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: PaymentType,
    pub status: PaymentStatus,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub balance: f64,
}

/// Default bucket contents: one settled payment and one pending charge.
pub fn seed() -> Vec<Payment> {
    vec![
        Payment {
            id: 1,
            amount: 1250.00,
            kind: PaymentType::Rent,
            status: PaymentStatus::Paid,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            method: Some("Bank Transfer".into()),
            due_date: None,
            balance: 1250.00,
        },
        Payment {
            id: 2,
            amount: 1250.00,
            kind: PaymentType::Rent,
            status: PaymentStatus::Pending,
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap_or_default(),
            method: None,
            due_date: NaiveDate::from_ymd_opt(2024, 2, 5),
            balance: 1250.00,
        },
    ]
}

/// The balance on the most recent record is the authoritative current
/// balance; an empty list means zero.
pub fn current_balance(payments: &[Payment]) -> f64 {
    payments.last().map(|p| p.balance).unwrap_or(0.0)
}

pub fn pending(payments: &[Payment]) -> Vec<&Payment> {
    payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Pending)
        .collect()
}

/// The last five paid records, newest first. The suffix is taken in
/// insertion order and reversed; records inserted out of date order show in
/// insertion order, not date order.
pub fn recent_paid(payments: &[Payment]) -> Vec<&Payment> {
    let paid: Vec<&Payment> = payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Paid)
        .collect();
    let start = paid.len().saturating_sub(5);
    paid[start..].iter().rev().copied().collect()
}

/// Raw form input for a payment.
#[derive(Debug, Default)]
pub struct PaymentForm {
    pub amount: String,
    pub method: String,
    pub date: String,
}

#[cfg(not(test))]
fn simulate_processing_delay() {
    // Stands in for an upstream payment processor; blocks only the worker
    // thread handling this submission.
    std::thread::sleep(std::time::Duration::from_secs(2));
}

#[cfg(test)]
fn simulate_processing_delay() {}

/// Process a payment: appends a paid record whose running balance is the
/// current balance minus the amount, clamped at zero. Overpayment is not
/// carried as credit.
pub fn pay(db: &Database, form: &PaymentForm) -> Result<Payment, ServerError> {
    if form.amount.trim().is_empty() || form.method.trim().is_empty() {
        return Err(ServerError::Validation(
            "Please fill in all required fields".into(),
        ));
    }
    let amount: f64 = form
        .amount
        .trim()
        .parse()
        .map_err(|_| ServerError::Validation("Payment amount must be a number".into()))?;
    let date = match form.date.trim() {
        "" => Local::now().date_naive(),
        raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ServerError::Validation("Payment date must be YYYY-MM-DD".into()))?,
    };

    simulate_processing_delay();

    let mut paid = None;
    db.update_bucket(&PAYMENTS, seed, |payments| {
        let balance = (current_balance(payments) - amount).max(0.0);
        let payment = Payment {
            id: next_record_id(),
            amount,
            kind: PaymentType::Rent,
            status: PaymentStatus::Paid,
            date,
            method: Some(form.method.trim().to_owned()),
            due_date: None,
            balance,
        };
        payments.push(payment.clone());
        paid = Some(payment);
    })?;

    paid.ok_or(ServerError::InternalError)
}

/// All payment records, seeding the bucket defaults on first read.
pub fn list(db: &Database) -> Result<Vec<Payment>, ServerError> {
    db.get_bucket(&PAYMENTS, seed)
}
