pub mod html;
pub mod redirect;
pub mod assets;

use crate::errors::ServerError;
use astra::Response;

/// Handler result: a response or an error rendered by the error page.
pub type ResultResp = Result<Response, ServerError>;

pub use assets::css_response;
pub use html::html_response;
pub use redirect::{redirect, redirect_with_cookie};
