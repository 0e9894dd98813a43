//! AssetHub Server - Asset Management System
//!
//! A Rust REST API server for tracking company assets, bookings, and
//! maintenance.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use assethub_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("assethub_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting AssetHub Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;
    let media_dir = config.storage.media_dir.clone();

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.auth.clone(), config.storage.clone());

    // First-run admin account, so a fresh database is administrable
    services
        .users
        .ensure_bootstrap_admin(&config.bootstrap)
        .await
        .expect("Failed to create bootstrap administrator");

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state, &media_dir);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState, media_dir: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/register", post(api::auth::register))
        .route("/auth/me", get(api::auth::me))
        // Assets
        .route("/assets", get(api::assets::list_assets))
        .route("/assets", post(api::assets::create_asset))
        .route("/assets/mine", get(api::assets::list_my_assets))
        .route("/assets/:id", get(api::assets::get_asset))
        .route("/assets/:id", put(api::assets::update_asset))
        .route("/assets/:id", delete(api::assets::delete_asset))
        .route("/assets/:id/assign", post(api::assets::assign_asset))
        .route("/assets/:id/unassign", post(api::assets::unassign_asset))
        .route("/assets/:id/report-issue", post(api::assets::report_issue))
        .route("/assets/:id/image", post(api::assets::upload_asset_image))
        // Bookings
        .route("/bookings", get(api::bookings::list_bookings))
        .route("/bookings", post(api::bookings::create_booking))
        .route("/bookings/mine", get(api::bookings::list_my_bookings))
        .route("/bookings/:id/approve", post(api::bookings::approve_booking))
        .route("/bookings/:id/reject", post(api::bookings::reject_booking))
        .route("/bookings/:id", delete(api::bookings::cancel_booking))
        // Maintenance
        .route("/maintenance", get(api::maintenance::list_tickets))
        .route("/maintenance", post(api::maintenance::create_ticket))
        .route("/maintenance/:id", get(api::maintenance::get_ticket))
        .route(
            "/maintenance/:id/assign",
            post(api::maintenance::assign_technician),
        )
        .route("/maintenance/:id/start", post(api::maintenance::start_ticket))
        .route(
            "/maintenance/:id/resolve",
            post(api::maintenance::resolve_ticket),
        )
        // Teams
        .route("/teams", get(api::teams::list_teams))
        .route("/teams", post(api::teams::create_team))
        .route("/teams/:id", get(api::teams::get_team))
        .route("/teams/:id", put(api::teams::update_team))
        .route("/teams/:id", delete(api::teams::delete_team))
        .route(
            "/teams/:id/members/:user_id",
            post(api::teams::add_team_member),
        )
        .route(
            "/teams/:id/members/:user_id",
            delete(api::teams::remove_team_member),
        )
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        // Feedback
        .route("/feedback", get(api::feedback::list_feedback))
        .route("/feedback", post(api::feedback::create_feedback))
        // Verifications
        .route(
            "/verifications",
            post(api::verifications::create_verification),
        )
        .route(
            "/verifications/mine",
            get(api::verifications::list_my_verifications),
        )
        .route(
            "/verifications/:id/complete",
            post(api::verifications::complete_verification),
        )
        // Statistics
        .route("/stats/dashboard", get(api::stats::dashboard_stats))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .nest_service("/media", ServeDir::new(media_dir))
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
