pub mod identity;
pub mod sessions;
pub mod token;

use astra::Request;
use tracing::warn;

use crate::db::connection::Database;
pub use identity::{AuthError, AuthUser, IdentityProvider, SupabaseIdentity};

pub const SESSION_COOKIE: &str = "session";
pub const DEFAULT_AFTER_LOGIN: &str = "/dashboard";

/// Value of cookie `name` from the request's `Cookie` header(s).
pub fn read_cookie(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

/// The signed-in user for this request, if any. Lookup failures count as
/// signed out.
pub fn current_user(req: &Request, db: &Database, now: i64) -> Option<AuthUser> {
    let token = read_cookie(req, SESSION_COOKIE)?;
    match db.with_conn(|conn| sessions::load_user_from_session(conn, &token, now)) {
        Ok(user) => user,
        Err(e) => {
            warn!(error = %e, "session lookup failed");
            None
        }
    }
}

/// Only same-site paths are accepted as post-login targets.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(p) if p.starts_with('/') && !p.starts_with("//") && !p.contains('\\') => p,
        _ => DEFAULT_AFTER_LOGIN,
    }
}

pub fn session_cookie(token: &str) -> String {
    format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        sessions::SESSION_TTL_SECS
    )
}

pub fn expired_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
