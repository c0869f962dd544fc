use crate::auth::AuthUser;
use crate::templates::site_layout;
use maud::{html, Markup};

const EFFECTIVE_DATE: &str = "15 May 2025";

struct Clause {
    heading: &'static str,
    body: &'static str,
    items: &'static [&'static str],
}

const PRIVACY: &[Clause] = &[
    Clause {
        heading: "1. Information We Collect",
        body: "Information you provide directly, and information we collect automatically when you use the Services:",
        items: &[
            "Registration Information: Name, email address, phone number, business name, and other contact details.",
            "Account Credentials: Username, passwords, authentication tokens.",
            "Payment Information: Billing name, billing address, and credit/debit card or MPESA details.",
            "Communication Content: Messages, support inquiries, feedback, or responses to surveys.",
            "Usage Data: Pages visited, time spent, features used, clicks, and browsing behavior.",
            "Device Data: IP address, browser type, device identifiers, operating system, and settings.",
            "Cookies and Similar Technologies: We use cookies to keep you signed in and personalize your experience.",
        ],
    },
    Clause {
        heading: "2. How We Use Your Information",
        body: "",
        items: &[
            "To Provide and Improve the Services",
            "Customer Support",
            "Billing and Payments",
            "Communication",
            "Analytics and Research",
            "Legal Compliance",
        ],
    },
    Clause {
        heading: "3. Data Storage and Retention",
        body: "Your personal data is stored securely on cloud servers. We retain your data only for as long as necessary to fulfill the purposes outlined in this policy or as required by law.",
        items: &[],
    },
    Clause {
        heading: "4. Your Rights and Choices",
        body: "You have the right to:",
        items: &[
            "Access a copy of the personal data we hold about you",
            "Correct or update inaccurate data",
            "Request deletion (right to be forgotten)",
            "Restrict or object to certain types of data processing",
            "Withdraw consent at any time",
            "Receive your data in a portable format",
        ],
    },
    Clause {
        heading: "5. Security Measures",
        body: "We implement administrative, technical, and physical safeguards to protect your personal data, including encryption, firewalls, and secure access controls.",
        items: &[],
    },
];

const TERMS: &[Clause] = &[
    Clause {
        heading: "1. Eligibility",
        body: "You must be at least 18 years old (or the legal age of majority in your jurisdiction) and have the legal capacity to enter into a binding contract to use Sasabot™.",
        items: &[],
    },
    Clause {
        heading: "2. Account Registration",
        body: "To access certain features, you must create an account and provide accurate registration information. You are responsible for the confidentiality of your credentials. You agree to:",
        items: &[
            "Provide true, current and complete information",
            "Keep your registration information up to date",
            "Notify us of any unauthorized use of your account",
        ],
    },
    Clause {
        heading: "3. Acceptable Use",
        body: "You agree not to misuse the Services, including sending spam, unlawful content, or attempting to disrupt the platform.",
        items: &[],
    },
    Clause {
        heading: "4. Subscription and Billing",
        body: "Some features of Sasabot™ are provided on a subscription basis. By subscribing, you agree to pay the applicable fees for your plan.",
        items: &[],
    },
    Clause {
        heading: "5. Trial and Beta Access",
        body: "If you're participating in a free trial or beta test, the Services are provided \"as-is\", without warranties. We may modify or discontinue access at any time. Beta users agree to provide feedback that may be used to improve the platform.",
        items: &[],
    },
    Clause {
        heading: "6. Intellectual Property",
        body: "All content, branding, software, documentation, and other elements of Sasabot™ are the property of African Phoenix Ltd or its licensors.",
        items: &[],
    },
    Clause {
        heading: "7. Third-Party Services",
        body: "Sasabot™ may integrate with third-party services such as WhatsApp Business API, payment processors (e.g., MPESA, Airtel Money), or CRMs. Your use of such services is governed by their own terms.",
        items: &[],
    },
    Clause {
        heading: "8. Data Privacy",
        body: "Your use of the Services is subject to our Privacy Policy.",
        items: &[],
    },
    Clause {
        heading: "9. Service Availability and Updates",
        body: "We do not guarantee uninterrupted access. We may perform updates, maintenance, or modify features without prior notice.",
        items: &[],
    },
    Clause {
        heading: "10. Termination",
        body: "You may cancel your account at any time. We may suspend or terminate your access if you breach these Terms, fail to pay applicable fees, or if required by law.",
        items: &[],
    },
];

fn legal_page(
    title: &str,
    intro: &str,
    clauses: &[Clause],
    contact: &str,
    user: Option<&AuthUser>,
) -> Markup {
    site_layout(
        title,
        user,
        html! {
            main class="container prose block" {
                h1 { (title) }
                p class="hint" { "Effective Date: " (EFFECTIVE_DATE) }
                p { (intro) }
                @for clause in clauses {
                    h2 { (clause.heading) }
                    @if !clause.body.is_empty() {
                        p { (clause.body) }
                    }
                    @if !clause.items.is_empty() {
                        ul {
                            @for item in clause.items {
                                li { (item) }
                            }
                        }
                    }
                }
                h2 { "Contact Us" }
                p {
                    "Questions about this document? Contact us at "
                    a href={ "mailto:" (contact) } { (contact) }
                }
            }
        },
    )
}

pub fn privacy_page(user: Option<&AuthUser>) -> Markup {
    legal_page(
        "Privacy Policy",
        "This Privacy Policy describes how Sasabot™ collects, uses, shares, and protects your personal information when you use our website and related services (the \"Services\").",
        PRIVACY,
        "privacy@sasabot.ai",
        user,
    )
}

pub fn terms_page(user: Option<&AuthUser>) -> Markup {
    legal_page(
        "Terms of Service",
        "These Terms of Service govern your access to and use of the Sasabot™ website, platform, APIs, and related services operated by African Phoenix Ltd. By using the Services you agree to these Terms.",
        TERMS,
        "legal@sasabot.ai",
        user,
    )
}
