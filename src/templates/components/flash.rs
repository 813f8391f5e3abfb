use maud::{html, Markup};

/// One-shot banner carried back through the redirect query string. Stands in
/// for the toast notifications of a richer client.
pub enum Flash {
    Notice(String),
    Error(String),
}

pub fn flash_banner(flash: &Flash) -> Markup {
    match flash {
        Flash::Notice(msg) => html! {
            div class="flash flash-notice" { (msg) }
        },
        Flash::Error(msg) => html! {
            div class="flash flash-error" { (msg) }
        },
    }
}
