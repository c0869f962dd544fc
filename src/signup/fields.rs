// src/signup/fields.rs
use std::collections::BTreeMap;

/// Hidden input naming a field whose error is currently on screen.
pub const SHOWN_ERRORS: &str = "shownErrors";

/// Every input on the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    Email,
    PhoneNumber,
    PreferredContact,
    BusinessName,
    IndustrySector,
    CompanySize,
    Country,
    City,
    CustomerChannels,
    CustomerEnquiries,
    Expectations,
    ShareData,
    FeedbackPreference,
    ReferralSource,
    AgreeToTerms,
}

impl FieldId {
    pub const ALL: &'static [FieldId] = &[
        FieldId::FullName,
        FieldId::Email,
        FieldId::PhoneNumber,
        FieldId::PreferredContact,
        FieldId::BusinessName,
        FieldId::IndustrySector,
        FieldId::CompanySize,
        FieldId::Country,
        FieldId::City,
        FieldId::CustomerChannels,
        FieldId::CustomerEnquiries,
        FieldId::Expectations,
        FieldId::ShareData,
        FieldId::FeedbackPreference,
        FieldId::ReferralSource,
        FieldId::AgreeToTerms,
    ];

    /// The `name` attribute used by the HTML input.
    pub fn form_name(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::PhoneNumber => "phoneNumber",
            FieldId::PreferredContact => "preferredContact",
            FieldId::BusinessName => "businessName",
            FieldId::IndustrySector => "industrySector",
            FieldId::CompanySize => "companySize",
            FieldId::Country => "businessLocation.country",
            FieldId::City => "businessLocation.city",
            FieldId::CustomerChannels => "customerChannels",
            FieldId::CustomerEnquiries => "customerEnquiries",
            FieldId::Expectations => "expectations",
            FieldId::ShareData => "shareData",
            FieldId::FeedbackPreference => "feedbackPreference",
            FieldId::ReferralSource => "referralSource",
            FieldId::AgreeToTerms => "agreeToTerms",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.form_name() == name)
    }

    pub fn is_set(self) -> bool {
        matches!(self, FieldId::CustomerChannels | FieldId::FeedbackPreference)
    }
}

/// Per-field validation messages. Absence of an entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: BTreeMap<FieldId, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn remove(&mut self, field: FieldId) -> Option<String> {
        self.entries.remove(&field)
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldId) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.entries.keys().copied()
    }

    /// Keep only the entries whose field satisfies `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(FieldId) -> bool) {
        self.entries.retain(|field, _| keep(*field));
    }
}
