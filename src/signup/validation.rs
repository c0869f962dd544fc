// src/signup/validation.rs
use regex::Regex;
use std::sync::LazyLock;

use crate::signup::fields::{FieldId, FormErrors};
use crate::signup::record::SignupRecord;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("phone pattern"));

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const BUSINESS_NAME_REQUIRED: &str = "Business name is required";
pub const CITY_REQUIRED: &str = "City is required";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const TERMS_REQUIRED: &str = "You must agree to receive updates and provide feedback";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Check every constrained field of `record`.
/// Pure: the same record always yields the same map.
pub fn validate(record: &SignupRecord) -> FormErrors {
    let mut errors = FormErrors::new();

    if record.full_name.trim().is_empty() {
        errors.insert(FieldId::FullName, FULL_NAME_REQUIRED);
    }

    if record.email.trim().is_empty() {
        errors.insert(FieldId::Email, EMAIL_REQUIRED);
    } else if !is_valid_email(&record.email) {
        errors.insert(FieldId::Email, EMAIL_INVALID);
    }

    if record.business_name.trim().is_empty() {
        errors.insert(FieldId::BusinessName, BUSINESS_NAME_REQUIRED);
    }

    if record.business_location.city.trim().is_empty() {
        errors.insert(FieldId::City, CITY_REQUIRED);
    }

    // Phone is optional; only its shape is checked.
    if !record.phone_number.is_empty() && !is_valid_phone(&record.phone_number) {
        errors.insert(FieldId::PhoneNumber, PHONE_INVALID);
    }

    if !record.agree_to_terms {
        errors.insert(FieldId::AgreeToTerms, TERMS_REQUIRED);
    }

    errors
}
