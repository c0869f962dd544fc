mod auth_tests;
mod pages_tests;
mod signup_tests;
