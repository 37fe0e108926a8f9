use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod auth;
mod config;
mod database;
mod editor;
mod error;
mod handlers;
mod middleware;
mod services;
mod themes;
mod types;

#[cfg(test)]
mod testing;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();
    tracing::info!("Starting ProjectShelf API in {:?} mode", config.environment);

    tracing_subscriber::fmt::init();

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("SHELF_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 ProjectShelf API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public auth routes (token acquisition)
        .merge(auth_public_routes())
        // Protected API
        .merge(project_api_routes())
        // Owner-scoped dashboard mirror
        .merge(dashboard_routes())
        // Visitor routes last: /:username is the catch-all path segment
        .merge(visitor_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn auth_public_routes() -> Router {
    use axum::routing::post;
    use handlers::public::auth;

    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

fn visitor_routes() -> Router {
    use axum::routing::post;
    use handlers::public::{profile, project, track};

    Router::new()
        // Unsaved preview mode must be registered before the :id route
        .route("/projects/preview", post(project::preview))
        .route("/projects/:id", get(project::detail))
        .route("/track", post(track::track))
        .route("/:username", get(profile::get))
}

fn project_api_routes() -> Router {
    use axum::routing::{post, put};
    use handlers::protected::{analytics, auth, projects};

    Router::new()
        // Project collection and record operations
        .route("/api/projects", get(projects::list).post(projects::create))
        .route(
            "/api/projects/:id",
            get(projects::record_get)
                .put(projects::record_put)
                .delete(projects::record_delete),
        )
        // File upload (blob store delegation)
        .route("/api/projects/:id/files", post(projects::upload))
        // Dashboard analytics view
        .route("/api/analytics/summary", get(analytics::summary))
        // Session introspection and profile management
        .route("/api/auth/whoami", get(auth::whoami))
        .route("/api/auth/profile", put(auth::update_profile))
        .layer(axum::middleware::from_fn(middleware::auth::jwt_auth_middleware))
}

fn dashboard_routes() -> Router {
    use handlers::protected::projects;

    // The username-scoped dashboard path: the owner guard redirects any
    // other authenticated user to their own canonical dashboard path.
    Router::new()
        .route("/:username/dashboard/projects", get(projects::list))
        .layer(axum::middleware::from_fn(middleware::validate_owner::validate_owner_middleware))
        .layer(axum::middleware::from_fn(middleware::auth::jwt_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "ProjectShelf API (Rust)",
            "version": version,
            "description": "Portfolio case-study backend built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "public_auth": "/auth/register, /auth/login (public - token acquisition)",
                "visitor": "/:username, /projects/:id, /projects/preview (public)",
                "track": "/track (public - page view tracking)",
                "projects": "/api/projects[/:id] (protected)",
                "files": "/api/projects/:id/files (protected)",
                "analytics": "/api/analytics/summary (protected)",
                "auth": "/api/auth/* (protected - session and profile)",
                "dashboard": "/:username/dashboard/projects (protected, owner only)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
