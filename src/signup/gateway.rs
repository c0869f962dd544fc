// src/signup/gateway.rs
use serde::Serialize;

use crate::backend::{BackendClient, BackendError};
use crate::signup::record::{BusinessLocation, SignupRecord};

/// Collection the beta signups are written to.
pub const BETA_SIGNUPS_TABLE: &str = "beta_signups";

/// Outbound write for a validated signup. Injected so tests can swap in a fake.
pub trait SignupStore: Send + Sync {
    fn insert_signup(&self, row: &BetaSignupRow<'_>) -> Result<(), BackendError>;
}

/// Storage-column view of a [`SignupRecord`].
/// Unset selects go out as empty strings.
#[derive(Debug, Serialize)]
pub struct BetaSignupRow<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub preferred_contact: &'static str,
    pub business_name: &'a str,
    pub industry_sector: &'static str,
    pub company_size: &'static str,
    pub business_location: &'a BusinessLocation,
    pub customer_channels: Vec<&'static str>,
    pub customer_enquiries: &'static str,
    pub expectations: &'a str,
    pub share_data: bool,
    pub feedback_preference: Vec<&'static str>,
    pub referral_source: &'static str,
}

impl<'a> BetaSignupRow<'a> {
    pub fn from_record(r: &'a SignupRecord) -> Self {
        Self {
            full_name: &r.full_name,
            email: &r.email,
            phone_number: &r.phone_number,
            preferred_contact: r.preferred_contact.map(|o| o.label()).unwrap_or(""),
            business_name: &r.business_name,
            industry_sector: r.industry_sector.map(|o| o.label()).unwrap_or(""),
            company_size: r.company_size.map(|o| o.label()).unwrap_or(""),
            business_location: &r.business_location,
            customer_channels: r.customer_channels.iter().map(|c| c.label()).collect(),
            customer_enquiries: r.customer_enquiries.map(|o| o.label()).unwrap_or(""),
            expectations: &r.expectations,
            share_data: r.share_data,
            feedback_preference: r.feedback_preference.iter().map(|f| f.label()).collect(),
            referral_source: r.referral_source.map(|o| o.label()).unwrap_or(""),
        }
    }
}

/// Writes signups to the hosted backend.
pub struct SupabaseSignupStore {
    client: BackendClient,
}

impl SupabaseSignupStore {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

impl SignupStore for SupabaseSignupStore {
    fn insert_signup(&self, row: &BetaSignupRow<'_>) -> Result<(), BackendError> {
        self.client
            .insert_rows(BETA_SIGNUPS_TABLE, std::slice::from_ref(row))
    }
}
