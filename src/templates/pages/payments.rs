use maud::{html, Markup};

use crate::domain::payments::{self, Payment, PaymentStatus};
use crate::templates::pages::{format_date, format_money};
use crate::templates::{badge, card, shell_layout, Flash, Tab};

fn status_badge(status: PaymentStatus) -> Markup {
    let tone = match status {
        PaymentStatus::Paid => "badge-ok",
        PaymentStatus::Pending => "badge-info",
        PaymentStatus::Overdue => "badge-danger",
    };
    badge(tone, status.as_str())
}

pub fn payments_page(payments: &[Payment], flash: Option<&Flash>) -> Markup {
    let balance = payments::current_balance(payments);
    let pending = payments::pending(payments);
    let recent = payments::recent_paid(payments);

    shell_layout(
        "Payments",
        Tab::Payments,
        flash,
        html! {
            div class="page-header" {
                div {
                    h1 { "Payment Management" }
                    p class="muted" { "Manage rent and fees" }
                }
            }

            (card("Current Balance", html! {
                div class="balance" {
                    p class="stat-value" { (format_money(balance)) }
                    p class="muted" {
                        @if balance > 0.0 { "Amount Due" } @else { "Paid in Full" }
                    }
                }
            }))

            (card("Make a Payment", payment_form(balance)))

            @if !pending.is_empty() {
                (card("Pending Payments", html! {
                    ul class="list" {
                        @for payment in &pending {
                            li class="row" {
                                div {
                                    p { strong { (format_money(payment.amount)) } }
                                    p class="muted" {
                                        "Due: " (format_date(payment.due_date.unwrap_or(payment.date)))
                                    }
                                }
                                (status_badge(payment.status))
                            }
                        }
                    }
                }))
            }

            (card("Recent Payments", html! {
                @if recent.is_empty() {
                    p class="empty" { "No payment history" }
                } @else {
                    ul class="list" {
                        @for payment in &recent {
                            li class="row" {
                                div {
                                    p { strong { (format_money(payment.amount)) } }
                                    p class="muted" {
                                        (format_date(payment.date))
                                        @if let Some(method) = &payment.method {
                                            " · " (method)
                                        }
                                    }
                                }
                                (status_badge(payment.status))
                            }
                        }
                    }
                }
            }))

            (card("Payment Information", html! {
                div class="info-block" {
                    h4 { "Accepted Payment Methods" }
                    ul class="muted" {
                        li { "Bank Transfer (ACH) - No fee" }
                        li { "Credit/Debit Cards - 2.5% convenience fee" }
                        li { "Online Check - $2 processing fee" }
                    }
                }
                div class="info-block" {
                    h4 { "Important Notes" }
                    ul class="muted" {
                        li { "Rent is due on the 1st of each month" }
                        li { "Late fees apply after the 5th" }
                        li { "Payments process within 1-2 business days" }
                    }
                }
            }))
        },
    )
}

fn payment_form(balance: f64) -> Markup {
    html! {
        form action="/payments/pay" method="post" class="stacked" {
            label for="amount" { "Payment Amount *" }
            input type="number" id="amount" name="amount" step="0.01" placeholder="0.00";

            label for="method" { "Payment Method *" }
            select id="method" name="method" {
                option value="" selected { "Select payment method" }
                option value="bank-transfer" { "Bank Transfer" }
                option value="credit-card" { "Credit Card" }
                option value="debit-card" { "Debit Card" }
                option value="check" { "Check" }
            }

            label for="date" { "Payment Date" }
            input type="date" id="date" name="date";

            div class="summary" {
                h4 { "Payment Summary" }
                p class="muted" { "Current Balance: " (format_money(balance)) }
            }

            button type="submit" { "Process Payment" }
        }
    }
}
