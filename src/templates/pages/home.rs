// templates/pages/home.rs

use crate::auth::AuthUser;
use crate::templates::{card, site_layout};
use maud::{html, Markup};

const FEATURES: &[(&str, &str)] = &[
    ("AI Customer Service", "Instantly respond to customer inquiries 24/7 in natural language that feels human"),
    ("Order Management", "Let customers browse products, place orders and track deliveries all through chat"),
    ("MPESA Integration", "Accept payments directly within WhatsApp with seamless MPESA STK push"),
    ("Multilingual Support", "Communicate with customers in English, Swahili, or Sheng - your choice"),
    ("Easy Setup", "Get started in minutes with no coding or technical knowledge required"),
    ("Business Analytics", "Track conversations, orders, and customer satisfaction with detailed insights"),
    ("Booking System", "Allow customers to book appointments, tables, or services automatically"),
    ("Multi-channel Support", "Connect with WhatsApp, Instagram DMs, and SMS from a single platform"),
];

const STEPS: &[(&str, &str)] = &[
    ("Customize Your Bot", "Tell SasaBot about your products, prices and opening hours."),
    ("Automate Orders", "Customers browse and order straight from WhatsApp."),
    ("Receive Payments", "MPESA payment requests go out the moment an order is confirmed."),
    ("Grow Your Business", "Spend your time on the counter, not on your phone."),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Jane Wanjiku", "With SasaBot, my online store never sleeps. Customers can shop at 2 AM and get immediate responses. My sales have increased by 40% since I started using it!"),
    ("David Omondi", "Table bookings used to be a nightmare to manage. Now SasaBot handles everything automatically."),
    ("Sarah Mwangi", "I was skeptical about using an AI assistant, but SasaBot was incredibly easy to set up."),
    ("Abulahi Mohammed", "Since we plugged SasaBot into our WhatsApp line, customers get instant answers on stock and pricing, even at 10 p.m."),
];

pub fn home_page(user: Option<&AuthUser>) -> Markup {
    site_layout(
        "Home",
        user,
        html! {
            section class="hero" {
                div class="container" {
                    h1 { "Your Business on WhatsApp, Powered by AI" }
                    p class="tagline" { "\"Biz yako iendelee, bila stress\"" }
                    p {
                        "SasaBot™ is an AI-powered chatbot designed specifically for African SMEs. "
                        "It answers customers, takes orders and collects MPESA payments on the channels they already use."
                    }
                    a href="/signup" class="btn" { "Join the Beta" }
                    " "
                    a href="/demo" { "See it in action" }
                }
            }

            section class="block" {
                div class="container grid cols-4" {
                    (card("Built for African SMEs", html! { p { "Priced for small businesses" } }))
                    (card("Multilingual", html! { p { "English, Swahili, Sheng" } }))
                    (card("24/7 Service", html! { p { "Always available" } }))
                    (card("No code", html! { p { "Set up in minutes" } }))
                }
            }

            section class="block" {
                div class="container" {
                    h2 { "Features" }
                    div class="grid cols-4" {
                        @for (title, body) in FEATURES {
                            (card(title, html! { p { (body) } }))
                        }
                    }
                }
            }

            section class="block" {
                div class="container" {
                    h2 { "How it works" }
                    ol class="grid cols-4" {
                        @for (title, body) in STEPS {
                            li { strong { (title) } p { (body) } }
                        }
                    }
                }
            }

            section class="block" {
                div class="container" {
                    h2 { "Join 100+ African Businesses Using SasaBot" }
                    div class="grid cols-2" {
                        @for (name, quote) in TESTIMONIALS {
                            blockquote class="card" {
                                p { "\u{201c}" (quote) "\u{201d}" }
                                footer { "— " (name) }
                            }
                        }
                    }
                }
            }

            section class="block hero" {
                div class="container" {
                    h2 { "Ready to try SasaBot?" }
                    p { "Free 3-month access to all features, then 50% off any plan for a year." }
                    a href="/signup" class="btn" { "Apply for Beta Access" }
                }
            }
        },
    )
}
