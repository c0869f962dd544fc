// src/signup/record.rs
use serde::Serialize;
use std::collections::BTreeSet;

/// Select options whose label doubles as the stored value.
macro_rules! labelled_options {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub enum $name {
            $(#[serde(rename = $label)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn from_label(raw: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|opt| opt.label() == raw)
            }

            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|opt| opt.label()).collect()
            }
        }
    };
}

labelled_options!(ContactMethod {
    Email => "Email",
    WhatsApp => "WhatsApp",
    Sms => "SMS",
});

labelled_options!(Industry {
    Retail => "Retail",
    Hospitality => "Hospitality",
    FinancialServices => "Financial Services",
    Services => "Services",
    Logistics => "Logistics",
    Other => "Other",
});

labelled_options!(CompanySize {
    Micro => "1-10",
    Small => "11-50",
    Medium => "51-200",
    Large => "201-500",
    Enterprise => "500+",
});

labelled_options!(
    /// Channels the business already uses to talk to customers.
    CustomerChannel {
        WhatsApp => "WhatsApp",
        Instagram => "Instagram",
        FacebookMessenger => "Facebook Messenger",
        Sms => "SMS",
        PhoneCalls => "Phone Calls",
        ECommerce => "E-commerce site",
        WalkIn => "Walk-in",
        Other => "Other",
    }
);

labelled_options!(
    /// Estimated customer enquiries per day.
    EnquiryVolume {
        UnderTen => "<10",
        TenToFifty => "10-50",
        FiftyToHundred => "50-100",
        HundredToTwoHundred => "100-200",
        TwoToThreeHundred => "200-300",
        OverThreeHundred => "300+",
    }
);

labelled_options!(FeedbackMethod {
    WhatsAppChat => "WhatsApp chat",
    GoogleForm => "Google Form",
    Email => "Email",
    ScheduledCall => "Scheduled call",
});

labelled_options!(ReferralSource {
    Google => "Google",
    Instagram => "Instagram",
    Facebook => "Facebook",
    WhatsAppGroup => "WhatsApp Group",
    FriendOrColleague => "Friend/Colleague",
    BusinessNetwork => "Business Network",
    Other => "Other",
});

pub const DEFAULT_COUNTRY: &str = "Kenya";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessLocation {
    pub country: String,
    pub city: String,
}

impl Default for BusinessLocation {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            city: String::new(),
        }
    }
}

/// Business-registration data captured by the beta signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupRecord {
    // contact
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub preferred_contact: Option<ContactMethod>,

    // business
    pub business_name: String,
    pub industry_sector: Option<Industry>,
    pub company_size: Option<CompanySize>,
    pub business_location: BusinessLocation,

    // engagement
    pub customer_channels: BTreeSet<CustomerChannel>,
    pub customer_enquiries: Option<EnquiryVolume>,
    pub expectations: String,

    // consent
    pub share_data: bool,
    pub feedback_preference: BTreeSet<FeedbackMethod>,
    pub referral_source: Option<ReferralSource>,
    pub agree_to_terms: bool,
}
