pub mod dashboard;
pub mod demo;
pub mod faq;
pub mod flow_builder;
pub mod home;
pub mod legal;
pub mod login;
pub mod pricing;
pub mod signup;

pub use dashboard::dashboard_page;
pub use demo::demo_page;
pub use faq::faq_page;
pub use flow_builder::flow_builder_page;
pub use home::home_page;
pub use legal::{privacy_page, terms_page};
pub use login::{login_page, LoginVm};
pub use pricing::{pricing_page, Billing};
pub use signup::{signup_form, signup_page, signup_result};
