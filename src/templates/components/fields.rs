// Form inputs bound to a field name and its current error.
use crate::signup::FieldId;
use maud::{html, Markup};

/// Re-renders the form when an input changes; target and swap are
/// inherited from the enclosing form.
pub const EDIT_URL: &str = "/signup/field";

pub struct Input<'a> {
    pub field: FieldId,
    pub label: &'a str,
    pub kind: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub required: bool,
    pub error: Option<&'a str>,
}

fn required_mark(required: bool) -> Markup {
    html! {
        @if required {
            " " span class="required" { "*" }
        }
    }
}

fn field_class(error: Option<&str>) -> &'static str {
    if error.is_some() {
        "field has-error"
    } else {
        "field"
    }
}

fn field_error(error: Option<&str>) -> Markup {
    html! {
        @if let Some(msg) = error {
            p class="field-error" { (msg) }
        }
    }
}

pub fn text_input(input: &Input<'_>) -> Markup {
    let name = input.field.form_name();
    html! {
        div class=(field_class(input.error)) {
            label for=(name) { (input.label) (required_mark(input.required)) }
            input
                type=(input.kind)
                id=(name)
                name=(name)
                value=(input.value)
                placeholder=(input.placeholder)
                hx-post=(EDIT_URL)
                hx-trigger="change";
            (field_error(input.error))
        }
    }
}

pub fn text_area(field: FieldId, label: &str, value: &str, placeholder: &str) -> Markup {
    let name = field.form_name();
    html! {
        div class="field" {
            label for=(name) { (label) }
            textarea
                id=(name)
                name=(name)
                rows="4"
                placeholder=(placeholder)
                hx-post=(EDIT_URL)
                hx-trigger="change"
            { (value) }
        }
    }
}

/// `<select>` over option labels; `current` is the chosen label, if any.
pub fn select(
    field: FieldId,
    label: &str,
    prompt: &str,
    options: &[&str],
    current: Option<&str>,
) -> Markup {
    let name = field.form_name();
    html! {
        div class="field" {
            label for=(name) { (label) }
            select id=(name) name=(name) hx-post=(EDIT_URL) hx-trigger="change" {
                option value="" { (prompt) }
                @for opt in options {
                    option value=(opt) selected[current == Some(*opt)] { (opt) }
                }
            }
        }
    }
}

/// Checkbox group for a multi-select field.
pub fn check_group(field: FieldId, prompt: &str, options: &[&str], checked: &[&str]) -> Markup {
    let name = field.form_name();
    html! {
        div class="field" {
            p { (prompt) }
            div class="checks" {
                @for opt in options {
                    @let id = format!("{name}-{opt}");
                    div {
                        input
                            type="checkbox"
                            id=(id)
                            name=(name)
                            value=(opt)
                            checked[checked.contains(opt)]
                            hx-post=(EDIT_URL)
                            hx-trigger="change";
                        label for=(id) { " " (opt) }
                    }
                }
            }
        }
    }
}

/// Single consent checkbox.
pub fn checkbox(
    field: FieldId,
    label: Markup,
    checked: bool,
    required: bool,
    error: Option<&str>,
) -> Markup {
    let name = field.form_name();
    html! {
        div class=(field_class(error)) {
            input
                type="checkbox"
                id=(name)
                name=(name)
                value="on"
                checked[checked]
                hx-post=(EDIT_URL)
                hx-trigger="change";
            label for=(name) { " " (label) (required_mark(required)) }
            (field_error(error))
        }
    }
}
