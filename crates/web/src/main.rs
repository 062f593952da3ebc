use anyhow::Context;
use axum::Router;
use storage::Database;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::judges::handlers::list_judges,
        features::judges::handlers::create_judge,
        features::users::handlers::list_users,
        features::scores::handlers::submit_score,
        features::scoreboard::handlers::get_scoreboard,
    ),
    components(
        schemas(
            storage::dto::judge::CreateJudgeRequest,
            storage::dto::judge::JudgeResponse,
            storage::dto::user::UserResponse,
            storage::dto::score::SubmitScoreRequest,
            storage::dto::score::ScoreResponse,
            storage::dto::scoreboard::ScoreboardEntry,
            storage::dto::scoreboard::ScoreboardResponse,
            storage::models::Judge,
            storage::models::User,
            storage::models::Score,
        )
    ),
    tags(
        (name = "judges", description = "Judge management endpoints"),
        (name = "users", description = "Participant listing endpoints"),
        (name = "scores", description = "Score submission endpoints"),
        (name = "scoreboard", description = "Public scoreboard endpoints"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting scoring application");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let app = Router::new()
        .nest("/api/judges", features::judges::routes::routes())
        .nest("/api/users", features::users::routes::routes())
        .nest("/api/scores", features::scores::routes::routes())
        .nest("/api/scoreboard", features::scoreboard::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new(&config.assets_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
