use clap::Parser;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use restaurant_pizza_service::establish_connection;
use restaurant_pizza_service::handlers::{app, ApiDoc};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

#[derive(Parser)]
#[command(version, about = "Restaurant-Pizza HTTP API")]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:5555")]
    listen: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let conn = &mut establish_connection();
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");

    let app = app()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&cli.listen).await?;
    info!("Restaurant-Pizza API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
