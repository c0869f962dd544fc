use crate::auth::AuthUser;
use crate::templates::site_layout;
use maud::{html, Markup};

const FAQS: &[(&str, &str)] = &[
    (
        "How does SasaBot work with my WhatsApp?",
        "SasaBot connects to your WhatsApp Business account through the official WhatsApp Business API. We handle all the technical setup so you don't have to.",
    ),
    (
        "What exactly counts as a \"conversation\"?",
        "A conversation is a single 24-hour window of interaction between SasaBot and one customer. The window opens when SasaBot receives a new message from that customer and closes 24 hours later; every message in that period belongs to the same conversation. You are billed on windows used, not on individual messages.",
    ),
    (
        "Do I need technical knowledge to use SasaBot?",
        "Not at all! Our setup wizard guides you through the process step by step, and our team is available to help if needed.",
    ),
    (
        "What languages does SasaBot support?",
        "SasaBot currently supports English, Swahili, and Sheng, and can reply in the language your customer is using.",
    ),
    (
        "How does the MPESA integration work?",
        "SasaBot sends an MPESA STK push when a customer is ready to pay. The customer enters their PIN and the payment is processed.",
    ),
    (
        "What if a customer asks something SasaBot can't answer?",
        "You can set SasaBot to notify you and hand the conversation over to a person on your team.",
    ),
    (
        "What happens after the free beta period?",
        "After your 3-month free beta you get 50% off any plan for one year.",
    ),
    (
        "Is my business information and customer data secure?",
        "Yes. Conversations and customer data are encrypted and never shared with third parties. You always keep ownership of your data.",
    ),
    (
        "Can SasaBot integrate with my existing business software?",
        "Beta users get basic integration with common tools through Zapier. Premium plans will include direct API access.",
    ),
];

pub fn faq_page(user: Option<&AuthUser>) -> Markup {
    site_layout(
        "FAQ",
        user,
        html! {
            section class="block" {
                div class="container prose" {
                    h1 { "Frequently Asked Questions" }
                    @for (question, answer) in FAQS {
                        details class="card" {
                            summary { strong { (question) } }
                            p { (answer) }
                        }
                    }
                    p {
                        "Can't find the answer you're looking for? "
                        a href="https://wa.me/254762222000" { "Chat with us on WhatsApp" }
                    }
                }
            }
        },
    )
}
