// src/auth/sessions.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::identity::AuthUser;
use crate::auth::token::{generate_session_token, hash_token};
use crate::errors::ServerError;

pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

/// Start a session for `user`; returns the raw token for the cookie.
pub fn create_session(conn: &Connection, user: &AuthUser, now: i64) -> Result<String, ServerError> {
    let raw_token = generate_session_token();
    let hash = hash_token(&raw_token);

    conn.execute(
        r#"
        insert into sessions (user_id, email, token_hash, created_at, expires_at)
        values (?, ?, ?, ?, ?)
        "#,
        params![user.id, user.email, hash.as_slice(), now, now + SESSION_TTL_SECS],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

pub fn load_user_from_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<AuthUser>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        r#"
        select user_id, email
        from sessions
        where token_hash = ?
          and expires_at > ?
          and revoked_at is null
        "#,
        params![hash.as_slice(), now],
        |row| {
            Ok(AuthUser {
                id: row.get(0)?,
                email: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

/// Mark the session revoked. Unknown tokens are ignored.
pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);

    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;

    Ok(())
}
