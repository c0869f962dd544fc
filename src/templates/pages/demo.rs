use crate::auth::AuthUser;
use crate::templates::site_layout;
use maud::{html, Markup};

#[derive(Clone, Copy)]
enum Speaker {
    Customer,
    Bot,
}

struct DemoScript {
    title: &'static str,
    description: &'static str,
    lines: &'static [(Speaker, &'static str)],
}

use Speaker::{Bot, Customer};

const DEMOS: &[DemoScript] = &[
    DemoScript {
        title: "Online Shop",
        description: "See how SasaBot handles product inquiries, processes orders, and collects payment for an online clothing store.",
        lines: &[
            (Customer, "Hi, do you have the blue dress in size M?"),
            (Bot, "Hello! Yes, we have the blue summer dress in size M in stock. Would you like to see a photo of it?"),
            (Customer, "Yes please"),
            (Bot, "Great choice! I can process your order right now. Would you like to pay via MPESA?"),
            (Customer, "Yes"),
            (Bot, "Perfect! Please confirm your delivery details: Jane Doe, Apartment 4B, Westlands, Nairobi. Is this correct?"),
        ],
    },
    DemoScript {
        title: "Restaurant Booking",
        description: "Watch SasaBot handle table reservations, answer menu questions, and manage special requests for a restaurant.",
        lines: &[
            (Customer, "Hello, I'd like to book a table for tomorrow evening."),
            (Bot, "Hi there! For how many people and what time would you prefer?"),
            (Customer, "4 people, around 7pm"),
            (Bot, "I have availability for 4 people at either 6:30pm or 7:15pm tomorrow. Which would you prefer?"),
            (Customer, "7:15 works better"),
            (Bot, "Thank you. Your reservation is confirmed. Would you like to see our menu?"),
        ],
    },
    DemoScript {
        title: "Salon Appointment",
        description: "Experience how SasaBot helps customers book beauty services, check pricing, and receive appointment reminders.",
        lines: &[
            (Customer, "Hi, I need a haircut and manicure"),
            (Bot, "Hello! Welcome to Glow Beauty Salon. When would you like to come in?"),
            (Customer, "Is Saturday morning available?"),
            (Bot, "We have availability this Saturday at 9:00 AM, 10:30 AM, or 11:45 AM. Which time would you prefer?"),
            (Customer, "10:30 please."),
            (Bot, "Your appointment is confirmed for this Saturday at 10:30 AM. Would you like a reminder the day before?"),
        ],
    },
];

fn chat(lines: &[(Speaker, &str)]) -> Markup {
    html! {
        div class="chat" {
            @for (speaker, text) in lines {
                @match speaker {
                    Speaker::Customer => { div class="bubble customer" { (text) } }
                    Speaker::Bot => { div class="bubble bot" { (text) } }
                }
            }
        }
    }
}

pub fn demo_page(user: Option<&AuthUser>) -> Markup {
    site_layout(
        "Demo",
        user,
        html! {
            section class="block" {
                div class="container" {
                    h1 { "See SasaBot in action" }
                    div class="grid cols-3" {
                        @for demo in DEMOS {
                            div class="card" {
                                h3 { (demo.title) }
                                p { (demo.description) }
                                (chat(demo.lines))
                            }
                        }
                    }
                    a href="/signup" class="btn" { "Try it for your business" }
                }
            }
        },
    )
}
