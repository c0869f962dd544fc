use crate::auth::AuthUser;
use crate::templates::{app_layout, card};
use maud::{html, Markup};

// Placeholder figures until conversations are wired up.
const STATS: &[(&str, &str)] = &[
    ("Total Conversations", "0"),
    ("Active Users", "0"),
    ("Response Rate", "0%"),
];

pub fn dashboard_page(user: &AuthUser) -> Markup {
    app_layout(
        "Dashboard",
        html! {
            nav class="site-header" {
                a href="/" class="brand" { "SasaBot™" }
                form method="post" action="/logout" {
                    span class="hint" { (user.email) " " }
                    button type="submit" class="btn" { "Sign out" }
                }
            }
            main class="container block" {
                div class="site-header" {
                    h1 { "Welcome back!" }
                    a href="/flow-builder" class="btn" { "+ New Chat Flow" }
                }

                div class="grid cols-3" {
                    @for (label, value) in STATS {
                        (card(label, html! { p class="stat" { (value) } }))
                    }
                }

                section class="card" {
                    h2 { "Getting Started" }
                    p {
                        "Welcome to your SasaBot dashboard! To get started, click the \"New Chat Flow\" button "
                        "to create your first automated conversation flow. Need help? Check out our "
                        a href="/faq" { "quick start guide" }
                        "."
                    }
                }
            }
        },
    )
}
