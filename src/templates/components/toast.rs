use crate::signup::Notification;
use maud::{html, Markup};

/// The message itself, styled by level.
pub fn toast_message(note: &Notification) -> Markup {
    let class = if note.is_error() {
        "toast error"
    } else {
        "toast success"
    };
    html! {
        div class=(class) role="status" { (note.message) }
    }
}

/// Out-of-band swap into the page's `#toasts` region.
pub fn toast(note: &Notification) -> Markup {
    html! {
        div id="toasts" hx-swap-oob="true" { (toast_message(note)) }
    }
}
