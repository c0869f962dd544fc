// src/signup/notify.rs

pub const INVALID_FORM: &str = "Please fill in all required fields correctly";
pub const SUBMIT_SUCCEEDED: &str = "Registration submitted successfully!";
pub const SUBMIT_FAILED: &str = "Failed to submit registration. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient message for the toast area. The form decides what to say;
/// templates decide how it looks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: &'static str,
}

impl Notification {
    pub fn invalid_form() -> Self {
        Self {
            level: NotificationLevel::Error,
            message: INVALID_FORM,
        }
    }

    pub fn submitted() -> Self {
        Self {
            level: NotificationLevel::Success,
            message: SUBMIT_SUCCEEDED,
        }
    }

    pub fn submit_failed() -> Self {
        Self {
            level: NotificationLevel::Error,
            message: SUBMIT_FAILED,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}
