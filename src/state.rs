use crate::auth::IdentityProvider;
use crate::db::Database;
use crate::signup::SignupStore;

/// Everything a request handler needs. Collaborators are trait objects so
/// tests can run the router against in-memory fakes.
pub struct AppState {
    pub db: Database,
    pub signups: Box<dyn SignupStore>,
    pub identity: Box<dyn IdentityProvider>,
}

impl AppState {
    pub fn new(
        db: Database,
        signups: Box<dyn SignupStore>,
        identity: Box<dyn IdentityProvider>,
    ) -> Self {
        Self {
            db,
            signups,
            identity,
        }
    }
}
