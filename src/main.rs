use crate::auth::SupabaseIdentity;
use crate::backend::BackendClient;
use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::router::handle;
use crate::signup::SupabaseSignupStore;
use crate::state::AppState;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod auth;
mod backend;
mod config;
mod db;
mod errors;
mod responses;
mod router;
mod signup;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1️⃣ Configuration from the environment
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Local session store
    let db = Database::new(cfg.database_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        error!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Backend collaborators
    let state = AppState::new(
        db,
        Box::new(SupabaseSignupStore::new(BackendClient::new(&cfg.backend))),
        Box::new(SupabaseIdentity::new(BackendClient::new(&cfg.backend))),
    );

    // 4️⃣ Serve
    info!("Starting server at http://{}", cfg.bind_addr);
    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
