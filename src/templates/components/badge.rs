use maud::{html, Markup};

/// Small status pill. `tone` is one of the badge-* classes in main.css.
pub fn badge(tone: &str, label: &str) -> Markup {
    html! {
        span class={ "badge " (tone) } { (label) }
    }
}
