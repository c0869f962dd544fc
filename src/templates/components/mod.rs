use maud::{html, Markup};

pub mod error;
pub mod fields;
pub mod toast;

pub use error::html_error_response;
pub use toast::{toast, toast_message};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn check_list(items: &[&str]) -> Markup {
    html! {
        ul class="checks-list" {
            @for item in items {
                li { "✓ " (item) }
            }
        }
    }
}
