use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use chrono::Utc;
use tracing::{debug, error, info};

use crate::auth::{self, sessions, AuthError, AuthUser};
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, redirect, redirect_with_cookie, ResultResp};
use crate::signup::fields::SHOWN_ERRORS;
use crate::signup::{FieldId, SignupForm};
use crate::state::AppState;
use crate::templates::pages::{self, Billing, LoginVm};

/// Largest form body we accept.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let now = now_unix();
    let user = auth::current_user(&req, &state.db, now);

    debug!(%method, %path, signed_in = user.is_some(), "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page(user.as_ref())),
        ("GET", "/demo") => html_response(pages::demo_page(user.as_ref())),
        ("GET", "/faq") => html_response(pages::faq_page(user.as_ref())),
        ("GET", "/privacy-policy") => html_response(pages::privacy_page(user.as_ref())),
        ("GET", "/terms-of-service") => html_response(pages::terms_page(user.as_ref())),
        ("GET", "/pricing") => {
            let query = parse_query(&req);
            let billing = Billing::from_query(query.get("billing").map(String::as_str));
            html_response(pages::pricing_page(user.as_ref(), billing))
        }

        ("GET", "/signup") => {
            html_response(pages::signup_page(user.as_ref(), &SignupForm::new(), None))
        }
        ("POST", "/signup") => post_signup(req, state, user.as_ref()),
        ("POST", "/signup/field") => post_signup_field(req),

        ("GET", "/login") => get_login(&req, user.as_ref()),
        ("POST", "/login") => post_login(req, state, now),
        ("POST", "/logout") => post_logout(&req, state, now),

        ("GET", "/dashboard") => match user {
            Some(u) => html_response(pages::dashboard_page(&u)),
            None => redirect("/login?next=/dashboard"),
        },
        ("GET", "/flow-builder") => match user {
            Some(_) => html_response(pages::flow_builder_page()),
            None => redirect("/login?next=/flow-builder"),
        },

        ("GET", "/static/main.css") => css_response(),

        _ => Err(ServerError::NotFound),
    }
}

fn post_signup(req: Request, state: &AppState, user: Option<&AuthUser>) -> ResultResp {
    let htmx = is_htmx(&req);
    let pairs = read_form(req)?;

    let mut form = SignupForm::new();
    form.apply_pairs(pairs)
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;

    let note = form.submit(state.signups.as_ref());

    if htmx {
        html_response(pages::signup_result(&form, &note))
    } else {
        html_response(pages::signup_page(user, &form, Some(&note)))
    }
}

/// An input changed: rebuild the form with the errors still on screen
/// and apply the edit, which drops that field's error.
fn post_signup_field(req: Request) -> ResultResp {
    let edited = req
        .headers()
        .get("HX-Trigger-Name")
        .and_then(|v| v.to_str().ok())
        .and_then(FieldId::from_name)
        .ok_or_else(|| ServerError::BadRequest("unknown field edited".into()))?;

    let pairs = read_form(req)?;
    let shown: Vec<FieldId> = pairs
        .iter()
        .filter(|(k, _)| k.as_str() == SHOWN_ERRORS)
        .filter_map(|(_, v)| FieldId::from_name(v))
        .collect();

    let form = SignupForm::resume(&pairs, &shown, edited)
        .map_err(|e| ServerError::BadRequest(e.to_string()))?;

    debug!(field = edited.form_name(), errors = form.errors().len(), "signup field edited");
    html_response(pages::signup_form(&form))
}

fn get_login(req: &Request, user: Option<&AuthUser>) -> ResultResp {
    let query = parse_query(req);
    let next = auth::safe_next(query.get("next").map(String::as_str));

    if user.is_some() {
        return redirect(next);
    }

    html_response(pages::login_page(&LoginVm {
        next,
        email: "",
        error: None,
    }))
}

fn post_login(req: Request, state: &AppState, now: i64) -> ResultResp {
    let form: HashMap<String, String> = read_form(req)?.into_iter().collect();
    let email = form.get("email").map(String::as_str).unwrap_or("");
    let password = form.get("password").map(String::as_str).unwrap_or("");
    let next = auth::safe_next(form.get("next").map(String::as_str));

    let retry = |message: &str| {
        html_response(pages::login_page(&LoginVm {
            next,
            email,
            error: Some(message),
        }))
    };

    match state.identity.sign_in(email, password) {
        Ok(user) => {
            let token = state
                .db
                .with_conn(|conn| sessions::create_session(conn, &user, now))?;
            info!(user_id = %user.id, "signed in");
            redirect_with_cookie(next, &auth::session_cookie(&token))
        }
        Err(AuthError::InvalidCredentials) => retry("Invalid email or password"),
        Err(AuthError::Backend(e)) => {
            error!(error = %e, "identity provider unavailable");
            retry("Sign-in is unavailable right now. Please try again.")
        }
    }
}

fn post_logout(req: &Request, state: &AppState, now: i64) -> ResultResp {
    if let Some(token) = auth::read_cookie(req, auth::SESSION_COOKIE) {
        state
            .db
            .with_conn(|conn| sessions::revoke_session(conn, &token, now))?;
    }
    redirect_with_cookie("/", &auth::expired_session_cookie())
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

/// Decode an `application/x-www-form-urlencoded` body, keeping repeated keys.
fn read_form(req: Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read body: {e}")))?;

    if body.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }

    Ok(url::form_urlencoded::parse(&body).into_owned().collect())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn now_unix() -> i64 {
    Utc::now().timestamp()
}
