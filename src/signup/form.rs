// src/signup/form.rs
use thiserror::Error;
use tracing::{error, info};

use crate::signup::fields::{FieldId, FormErrors};
use crate::signup::gateway::{BetaSignupRow, SignupStore};
use crate::signup::notify::Notification;
use crate::signup::record::{
    CompanySize, ContactMethod, CustomerChannel, EnquiryVolume, FeedbackMethod, Industry,
    ReferralSource, SignupRecord,
};
use crate::signup::validation::validate;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("'{value}' is not an option for {field}")]
    UnknownOption { field: &'static str, value: String },
    #[error("'{value}' is not a yes/no value for {field}")]
    NotABool { field: &'static str, value: String },
    #[error("{0} holds several values")]
    NotScalar(&'static str),
    #[error("{0} is not a multi-select field")]
    NotASet(&'static str),
}

/// In-progress signup: the record being edited, its errors, and whether
/// it has been accepted. The in-flight state lives in the browser
/// (`hx-disabled-elt` on the submit button).
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    record: SignupRecord,
    errors: FormErrors,
    submitted: bool,
}

fn parse_option<T>(
    field: FieldId,
    raw: &str,
    from_label: fn(&str) -> Option<T>,
) -> Result<Option<T>, FieldError> {
    if raw.is_empty() {
        return Ok(None);
    }
    from_label(raw)
        .map(Some)
        .ok_or_else(|| FieldError::UnknownOption {
            field: field.form_name(),
            value: raw.to_string(),
        })
}

fn parse_bool(field: FieldId, raw: &str) -> Result<bool, FieldError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "" | "off" | "false" | "0" | "no" => Ok(false),
        _ => Err(FieldError::NotABool {
            field: field.form_name(),
            value: raw.to_string(),
        }),
    }
}

fn toggle<T: Ord>(set: &mut std::collections::BTreeSet<T>, value: T, included: bool) {
    if included {
        set.insert(value);
    } else {
        set.remove(&value);
    }
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &SignupRecord {
        &self.record
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Update a single-valued field from its raw input value.
    /// Clears that field's error without re-validating.
    pub fn set_field(&mut self, field: FieldId, value: &str) -> Result<(), FieldError> {
        let r = &mut self.record;
        match field {
            FieldId::FullName => r.full_name = value.to_string(),
            FieldId::Email => r.email = value.to_string(),
            FieldId::PhoneNumber => r.phone_number = value.to_string(),
            FieldId::BusinessName => r.business_name = value.to_string(),
            FieldId::Country => r.business_location.country = value.to_string(),
            FieldId::City => r.business_location.city = value.to_string(),
            FieldId::Expectations => r.expectations = value.to_string(),
            FieldId::PreferredContact => {
                r.preferred_contact = parse_option(field, value, ContactMethod::from_label)?
            }
            FieldId::IndustrySector => {
                r.industry_sector = parse_option(field, value, Industry::from_label)?
            }
            FieldId::CompanySize => {
                r.company_size = parse_option(field, value, CompanySize::from_label)?
            }
            FieldId::CustomerEnquiries => {
                r.customer_enquiries = parse_option(field, value, EnquiryVolume::from_label)?
            }
            FieldId::ReferralSource => {
                r.referral_source = parse_option(field, value, ReferralSource::from_label)?
            }
            FieldId::ShareData => r.share_data = parse_bool(field, value)?,
            FieldId::AgreeToTerms => r.agree_to_terms = parse_bool(field, value)?,
            FieldId::CustomerChannels | FieldId::FeedbackPreference => {
                return Err(FieldError::NotScalar(field.form_name()))
            }
        }
        self.errors.remove(field);
        Ok(())
    }

    /// Add (`included`) or remove `value` from one of the multi-select fields.
    pub fn toggle_set_member(
        &mut self,
        field: FieldId,
        value: &str,
        included: bool,
    ) -> Result<(), FieldError> {
        let unknown = || FieldError::UnknownOption {
            field: field.form_name(),
            value: value.to_string(),
        };

        match field {
            FieldId::CustomerChannels => {
                let channel = CustomerChannel::from_label(value).ok_or_else(unknown)?;
                toggle(&mut self.record.customer_channels, channel, included);
            }
            FieldId::FeedbackPreference => {
                let method = FeedbackMethod::from_label(value).ok_or_else(unknown)?;
                toggle(&mut self.record.feedback_preference, method, included);
            }
            _ => return Err(FieldError::NotASet(field.form_name())),
        }
        self.errors.remove(field);
        Ok(())
    }

    /// Replay a posted HTML form onto this state. Checkboxes arrive only
    /// when ticked, so a pair for a set field means "included".
    /// Names that are not form fields are skipped.
    pub fn apply_pairs<I, K, V>(&mut self, pairs: I) -> Result<(), FieldError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in pairs {
            let Some(field) = FieldId::from_name(name.as_ref()) else {
                continue;
            };
            if field.is_set() {
                self.toggle_set_member(field, value.as_ref(), true)?;
            } else {
                self.set_field(field, value.as_ref())?;
            }
        }
        Ok(())
    }

    /// Rebuild a form the user is still editing.
    ///
    /// `pairs` is the posted form, `shown` the fields whose errors were on
    /// screen and `edited` the input that just changed. Errors for `shown`
    /// are recomputed from the posted values, then `edited` is applied
    /// through `set_field` / `toggle_set_member`, which clears its error.
    pub fn resume(
        pairs: &[(String, String)],
        shown: &[FieldId],
        edited: FieldId,
    ) -> Result<Self, FieldError> {
        let name = edited.form_name();
        let mut form = Self::new();

        form.apply_pairs(
            pairs
                .iter()
                .filter(|(k, _)| k.as_str() != name)
                .map(|(k, v)| (k.as_str(), v.as_str())),
        )?;
        form.errors = validate(&form.record);
        form.errors.retain(|field| shown.contains(&field));

        let mut values = pairs
            .iter()
            .filter(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v.as_str());
        if edited.is_set() {
            form.errors.remove(edited);
            for value in values {
                form.toggle_set_member(edited, value, true)?;
            }
        } else {
            // unticked checkboxes are not posted at all
            form.set_field(edited, values.next_back().unwrap_or(""))?;
        }
        Ok(form)
    }

    /// Back to the freshly mounted state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate, then hand a snapshot to `store`.
    ///
    /// Invalid forms never reach the store. A failed write leaves every
    /// entered value in place so the user can retry; a successful one
    /// discards the record and moves to the terminal submitted state.
    pub fn submit(&mut self, store: &dyn SignupStore) -> Notification {
        if self.submitted {
            return Notification::submitted();
        }

        self.errors = validate(&self.record);
        if !self.errors.is_empty() {
            info!(invalid_fields = self.errors.len(), "signup rejected by validation");
            return Notification::invalid_form();
        }

        match store.insert_signup(&BetaSignupRow::from_record(&self.record)) {
            Ok(()) => {
                info!("beta signup stored");
                self.reset();
                self.submitted = true;
                Notification::submitted()
            }
            Err(e) => {
                error!(error = %e, "error submitting signup form");
                Notification::submit_failed()
            }
        }
    }
}
