use crate::auth::AuthUser;
use crate::templates::site_layout;
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Billing {
    #[default]
    Monthly,
    Yearly,
}

impl Billing {
    /// `?billing=yearly` switches the table; anything else is monthly.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("yearly") => Billing::Yearly,
            _ => Billing::Monthly,
        }
    }
}

const FEATURES: [&str; 7] = [
    "Chat Flows Automation",
    "Order & payment links",
    "Multi-language support",
    "AI chat capabilities",
    "Analytics dashboard",
    "Instagram & Facebook (Coming Soon)",
    "Priority support",
];

pub struct Plan {
    pub name: &'static str,
    pub beta: bool,
    pub monthly_kes: u32,
    pub yearly_kes: u32,
    pub conversations: &'static str,
    pub includes: [bool; 7],
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Beta Access",
        beta: true,
        monthly_kes: 0,
        yearly_kes: 0,
        conversations: "Unlimited during beta",
        includes: [true; 7],
    },
    Plan {
        name: "Msingi",
        beta: false,
        monthly_kes: 999,
        yearly_kes: 9_999,
        conversations: "500 conversations/month",
        includes: [true, true, true, false, false, false, false],
    },
    Plan {
        name: "Growth",
        beta: false,
        monthly_kes: 9_999,
        yearly_kes: 109_999,
        conversations: "5,000 conversations/month",
        includes: [true, true, true, true, true, false, false],
    },
    Plan {
        name: "Boss",
        beta: false,
        monthly_kes: 19_999,
        yearly_kes: 215_999,
        conversations: "10,000 conversations/month",
        includes: [true; 7],
    },
];

/// "KES 109,999"
pub fn format_kes(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("KES {out}")
}

fn plan_card(plan: &Plan, billing: Billing) -> Markup {
    let (price, period) = match billing {
        Billing::Monthly => (plan.monthly_kes, "/month"),
        Billing::Yearly => (plan.yearly_kes, "/year"),
    };

    html! {
        div class=(if plan.beta { "card featured" } else { "card" }) {
            h3 { (plan.name) }
            @if plan.beta {
                p { strong { "FREE" } " for 3 months" }
                p class="hint" { "Then 50% off any plan for 1 year!" }
            } @else {
                p { strong { (format_kes(price)) } (period) }
            }
            p class="hint" { (plan.conversations) }
            ul {
                @for (feature, included) in FEATURES.iter().zip(plan.includes) {
                    li { @if included { "✓ " } @else { "✗ " } (feature) }
                }
            }
            @if plan.beta {
                a href="/signup" class="btn" { "Join Beta" }
            }
        }
    }
}

pub fn pricing_page(user: Option<&AuthUser>, billing: Billing) -> Markup {
    site_layout(
        "Pricing",
        user,
        html! {
            section class="block" {
                div class="container" {
                    h1 { "Simple, transparent pricing" }
                    p {
                        @match billing {
                            Billing::Monthly => { strong { "Monthly" } " | " a href="/pricing?billing=yearly" { "Yearly" } }
                            Billing::Yearly => { a href="/pricing?billing=monthly" { "Monthly" } " | " strong { "Yearly" } }
                        }
                    }
                    div class="grid cols-4" {
                        @for plan in PLANS {
                            (plan_card(plan, billing))
                        }
                    }
                    p class="hint" { "No credit card required. All prices are in KES and include VAT." }
                    p { "Need a custom plan? " a href="mailto:info@sasabot.ai" { "Contact us" } }
                }
            }
        },
    )
}
