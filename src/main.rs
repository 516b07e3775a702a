//! Crewzy - Employee Directory Backend
//! Mission: Serve the employee directory behind bearer-token authentication

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crewzy_backend::{
    auth::{AuthService, InMemoryUserStore, JwtHandler},
    create_router,
    employees::EmployeeStore,
    AppState, Config,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize environment and logging
    load_env();
    init_tracing();

    let config = Config::parse();
    info!("🚀 Crewzy employee directory starting");

    if config.uses_dev_secret() {
        warn!("⚠️  JWT_SECRET not set, using the development secret. CHANGE IN PRODUCTION!");
    }

    let auth_config = config.auth_config();
    let users = Arc::new(InMemoryUserStore::with_default_users(config.bcrypt_cost)?);
    let jwt_handler = Arc::new(JwtHandler::new(&auth_config));
    let auth = Arc::new(AuthService::new(users, jwt_handler, config.bcrypt_cost)?);

    info!(
        "🔐 Authentication initialized (token ttl {}m)",
        auth_config.token_ttl.num_minutes()
    );

    let employees = Arc::new(EmployeeStore::open(&config.database_path)?);

    let app = create_router(AppState { auth, employees });

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("🎯 API server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing from RUST_LOG, defaulting to debug for this crate
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crewzy_backend=debug,crewzy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_env() {
    // Standard dotenv search (cwd + parents)
    let _ = dotenv();

    // Also pick up the crate's own .env when launched from elsewhere
    let manifest_env = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    if manifest_env.exists() {
        let _ = dotenv::from_path(&manifest_env);
    }
}
