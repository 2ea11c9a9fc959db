use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{PgExpenseRepository, PgParticipantRepository};
use application::{ExpenseService, ParticipantService, SummaryService};
use config::ServerConfig;

/// Type aliases for application services with concrete repository implementations
pub type AppParticipantService = ParticipantService<PgParticipantRepository>;
pub type AppExpenseService = ExpenseService<PgExpenseRepository>;
pub type AppSummaryService = SummaryService<PgExpenseRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub participant_service: Arc<AppParticipantService>,
    pub expense_service: Arc<AppExpenseService>,
    pub summary_service: Arc<AppSummaryService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Warikan API is running - splitting the bill fairly".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: sqlx::PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🧾 Warikan API initializing...");

    let config = ServerConfig::from_secrets(&secrets);
    tracing::info!("➗ Split policy: {}", config.split_policy);

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| anyhow::Error::new(e).context("Failed to run database migrations"))?;

    tracing::info!("✅ Database migrations completed");

    // Initialize application services
    let participant_repo = Arc::new(PgParticipantRepository::new(pool.clone()));
    let expense_repo = Arc::new(PgExpenseRepository::new(pool));

    let state = AppState {
        participant_service: Arc::new(ParticipantService::new(participant_repo)),
        expense_service: Arc::new(ExpenseService::new(
            expense_repo.clone(),
            config.split_policy,
        )),
        summary_service: Arc::new(SummaryService::new(expense_repo)),
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::participant::router())
        .merge(routes::expense::router())
        .merge(routes::summary::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Warikan API ready");

    Ok(router.into())
}
