use crate::auth::{sessions, AuthError, AuthUser, IdentityProvider};
use crate::backend::BackendError;
use crate::db::{init_db, Database};
use crate::signup::gateway::{BetaSignupRow, SignupStore};
use crate::state::AppState;
use astra::{Body, Response};
use std::io::Read;
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

pub const OWNER_EMAIL: &str = "owner@shop.co.ke";
pub const OWNER_PASSWORD: &str = "secret";
/// Signing in with this address simulates the identity service being down.
pub const OUTAGE_EMAIL: &str = "outage@shop.co.ke";

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// Fresh on-disk DB with the production schema.
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "sasabot_test_{}_{}.sqlite",
        std::process::id(),
        NEXT_DB.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = std::fs::remove_file(&path);
    let db = Database::new(path.to_string_lossy().into_owned());
    init_db(&db, "sql/schema.sql").unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

/// Keeps every row it is asked to insert.
#[derive(Default)]
pub struct RecordingStore {
    pub fail: bool,
    pub rows: Mutex<Vec<serde_json::Value>>,
}

impl RecordingStore {
    pub fn calls(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl SignupStore for Arc<RecordingStore> {
    fn insert_signup(&self, row: &BetaSignupRow<'_>) -> Result<(), BackendError> {
        self.rows
            .lock()
            .unwrap()
            .push(serde_json::to_value(row).unwrap());
        if self.fail {
            Err(BackendError::Transport("connection reset by peer".into()))
        } else {
            Ok(())
        }
    }
}

pub struct FakeIdentity;

impl IdentityProvider for FakeIdentity {
    fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        match (email, password) {
            (OWNER_EMAIL, OWNER_PASSWORD) => Ok(owner()),
            (OUTAGE_EMAIL, _) => Err(AuthError::Backend(BackendError::Api {
                status: 503,
                body: "upstream unavailable".into(),
            })),
            _ => Err(AuthError::InvalidCredentials),
        }
    }
}

pub fn owner() -> AuthUser {
    AuthUser {
        id: "2b7f0c1e".into(),
        email: OWNER_EMAIL.into(),
    }
}

/// App state over a throwaway DB file, removed again on drop.
pub struct TestState {
    state: AppState,
}

impl Deref for TestState {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.state
    }
}

impl Drop for TestState {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(self.state.db.path());
    }
}

pub fn test_state(store: Arc<RecordingStore>) -> TestState {
    TestState {
        state: AppState::new(init_test_db(), Box::new(store), Box::new(FakeIdentity)),
    }
}

/// A session cookie header value for the owner account.
pub fn owner_cookie(state: &AppState) -> String {
    let token = state
        .db
        .with_conn(|conn| sessions::create_session(conn, &owner(), now_unix()))
        .expect("Failed to create session");
    format!("session={token}")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn form_body(pairs: &[(&str, &str)]) -> Body {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    Body::from(encoded)
}

#[test]
fn test_db_file_is_removed_on_drop() {
    let state = test_state(Arc::default());
    let path = std::path::PathBuf::from(state.db.path());
    owner_cookie(&state);
    assert!(path.exists());

    drop(state);
    assert!(!path.exists());
}
