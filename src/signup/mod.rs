pub mod fields;
pub mod form;
pub mod gateway;
pub mod notify;
pub mod record;
pub mod validation;

pub use fields::FieldId;
pub use form::SignupForm;
pub use gateway::{SignupStore, SupabaseSignupStore};
pub use notify::Notification;
