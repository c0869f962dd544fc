use crate::auth::AuthUser;
use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

pub fn site_layout(title: &str, user: Option<&AuthUser>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | SasaBot" }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {}
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { "SasaBot™" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/demo" { "Demo" } }
                            li { a href="/pricing" { "Pricing" } }
                            li { a href="/faq" { "FAQ" } }
                            @if user.is_some() {
                                li { a href="/dashboard" { "Dashboard" } }
                            }
                        }
                    }
                    @match user {
                        Some(u) => {
                            form method="post" action="/logout" {
                                span class="hint" { (u.email) " " }
                                button type="submit" class="btn" { "Sign out" }
                            }
                        }
                        None => {
                            div {
                                a href="/login" { "Login" }
                                " "
                                a href="/signup" class="btn" { "Join Beta" }
                            }
                        }
                    }
                }
                div id="toasts" {}
                (content)
                (footer())
            }
        }
    }
}

/// Bare layout for the signed-in app shell.
pub fn app_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | SasaBot" }
                link rel="stylesheet" href="/static/main.css";
            }
            body { (content) }
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="container grid cols-3" {
                div {
                    p class="brand" { "SasaBot™" }
                    p { "AI-powered WhatsApp assistant for African SMEs." }
                }
                div {
                    h4 { "Legal" }
                    ul {
                        li { a href="/privacy-policy" { "Privacy Policy" } }
                        li { a href="/terms-of-service" { "Terms of Service" } }
                    }
                }
                div {
                    h4 { "Contact" }
                    ul {
                        li { a href="mailto:info@sasabot.ai" { "info@sasabot.ai" } }
                        li { "+254 762 222 000" }
                        li { a href="https://wa.me/254762222000" { "WhatsApp Support" } }
                    }
                }
            }
        }
    }
}
