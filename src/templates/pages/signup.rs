// templates/pages/signup.rs

use crate::auth::AuthUser;
use crate::signup::record::{
    CompanySize, ContactMethod, CustomerChannel, EnquiryVolume, FeedbackMethod, Industry,
    ReferralSource,
};
use crate::signup::fields::SHOWN_ERRORS;
use crate::signup::{FieldId, Notification, SignupForm};
use crate::templates::components::fields::{
    check_group, checkbox, select, text_area, text_input, Input,
};
use crate::templates::components::{check_list, toast, toast_message};
use crate::templates::site_layout;
use maud::{html, Markup};

const BETA_BENEFITS: &[&str] = &[
    "Free 3-month access to all features",
    "50% discount for 1 year after beta",
    "Priority support and onboarding",
    "Influence future features",
    "Setup in less than 24 hours",
];

fn form_section(title: &str, body: Markup) -> Markup {
    html! {
        div class="card form-section" {
            h3 { (title) }
            (body)
        }
    }
}

/// The editable form, re-rendered with inline errors after a failed submit.
pub fn signup_form(form: &SignupForm) -> Markup {
    let r = form.record();
    let errors = form.errors();
    let channels: Vec<&str> = r.customer_channels.iter().map(|c| c.label()).collect();
    let feedback: Vec<&str> = r.feedback_preference.iter().map(|f| f.label()).collect();

    html! {
        div id="signup" {
            form
                method="post"
                action="/signup"
                hx-post="/signup"
                hx-target="#signup"
                hx-swap="outerHTML"
                hx-disabled-elt="#signup-submit"
                novalidate
            {
                input type="hidden" name=(FieldId::Country.form_name()) value=(r.business_location.country);
                @for field in errors.fields() {
                    input type="hidden" name=(SHOWN_ERRORS) value=(field.form_name());
                }

                (form_section("Contact Information", html! {
                    div class="grid cols-2" {
                        (text_input(&Input {
                            field: FieldId::FullName,
                            label: "Full Name",
                            kind: "text",
                            value: &r.full_name,
                            placeholder: "Your name",
                            required: true,
                            error: errors.get(FieldId::FullName),
                        }))
                        (text_input(&Input {
                            field: FieldId::Email,
                            label: "Email Address",
                            kind: "email",
                            value: &r.email,
                            placeholder: "you@example.com",
                            required: true,
                            error: errors.get(FieldId::Email),
                        }))
                        (text_input(&Input {
                            field: FieldId::PhoneNumber,
                            label: "Phone Number (WhatsApp)",
                            kind: "tel",
                            value: &r.phone_number,
                            placeholder: "+254",
                            required: false,
                            error: errors.get(FieldId::PhoneNumber),
                        }))
                        (select(
                            FieldId::PreferredContact,
                            "Preferred Contact Method",
                            "Select Contact Method",
                            &ContactMethod::labels(),
                            r.preferred_contact.map(|o| o.label()),
                        ))
                    }
                }))

                (form_section("Business Details", html! {
                    div class="grid cols-2" {
                        (text_input(&Input {
                            field: FieldId::BusinessName,
                            label: "Business Name",
                            kind: "text",
                            value: &r.business_name,
                            placeholder: "Your business name",
                            required: true,
                            error: errors.get(FieldId::BusinessName),
                        }))
                        (select(
                            FieldId::IndustrySector,
                            "Industry Sector",
                            "Select Industry",
                            &Industry::labels(),
                            r.industry_sector.map(|o| o.label()),
                        ))
                        (select(
                            FieldId::CompanySize,
                            "Company Size",
                            "Select Company Size",
                            &CompanySize::labels(),
                            r.company_size.map(|o| o.label()),
                        ))
                        (text_input(&Input {
                            field: FieldId::City,
                            label: "City",
                            kind: "text",
                            value: &r.business_location.city,
                            placeholder: "Enter your city",
                            required: true,
                            error: errors.get(FieldId::City),
                        }))
                    }
                    (check_group(
                        FieldId::CustomerChannels,
                        "How do you currently interact with customers?",
                        &CustomerChannel::labels(),
                        &channels,
                    ))
                    (select(
                        FieldId::CustomerEnquiries,
                        "Estimated customer enquiries per day",
                        "Select Range",
                        &EnquiryVolume::labels(),
                        r.customer_enquiries.map(|o| o.label()),
                    ))
                }))

                (form_section("Expectations & Permissions", html! {
                    (text_area(
                        FieldId::Expectations,
                        "What would you like SasaBot™ to help you with the most?",
                        &r.expectations,
                        "E.g., handling customer chats, tracking orders, sending payment links, post on socials, etc.",
                    ))
                    (checkbox(
                        FieldId::ShareData,
                        html! {
                            "I agree to share anonymous chat data to improve SasaBot's accuracy"
                            span class="hint" {
                                " Your data will be anonymized and used only to improve our service."
                            }
                        },
                        r.share_data,
                        false,
                        None,
                    ))
                    (check_group(
                        FieldId::FeedbackPreference,
                        "How would you prefer to give feedback during the beta?",
                        &FeedbackMethod::labels(),
                        &feedback,
                    ))
                }))

                (form_section("Additional Information", html! {
                    (select(
                        FieldId::ReferralSource,
                        "How did you hear about us?",
                        "Select Source",
                        &ReferralSource::labels(),
                        r.referral_source.map(|o| o.label()),
                    ))
                    (checkbox(
                        FieldId::AgreeToTerms,
                        html! {
                            "I agree to receive updates about SasaBot™ and provide feedback during the beta phase"
                        },
                        r.agree_to_terms,
                        true,
                        errors.get(FieldId::AgreeToTerms),
                    ))
                }))

                div class="text-center" {
                    button type="submit" id="signup-submit" class="btn" {
                        span class="idle-label" { "Submit Application" }
                        span class="busy-label" { "Submitting..." }
                    }
                }
            }
        }
    }
}

/// Terminal view once the backend accepted the signup.
pub fn thank_you() -> Markup {
    html! {
        div id="signup" class="grid cols-2" {
            div class="card" {
                h3 { "Beta Benefits" }
                (check_list(BETA_BENEFITS))
            }
            div class="card featured" {
                h3 { "Thank You!" }
                p {
                    "Your application for the SasaBot beta program has been received. "
                    "We'll be in touch within 24 hours with your account setup details."
                }
                p {
                    "In the meantime, why not "
                    a href="https://wa.me/254762222000" { "chat with us on WhatsApp" }
                    " if you have any questions?"
                }
            }
        }
    }
}

/// HTMX partial returned by a submit: the next view plus a toast.
pub fn signup_result(form: &SignupForm, note: &Notification) -> Markup {
    html! {
        @if form.is_submitted() {
            (thank_you())
        } @else {
            (signup_form(form))
        }
        (toast(note))
    }
}

pub fn signup_page(
    user: Option<&AuthUser>,
    form: &SignupForm,
    note: Option<&Notification>,
) -> Markup {
    site_layout(
        "Join the Beta",
        user,
        html! {
            main class="container block" {
                div class="text-center" {
                    h1 { "Join SasaBot Beta Program" }
                    p class="lead" { "Get 3 months free access and 50% lifetime discount" }
                }
                @if form.is_submitted() {
                    (thank_you())
                } @else {
                    (signup_form(form))
                }
                @if let Some(note) = note {
                    (toast_message(note))
                }
            }
        },
    )
}
