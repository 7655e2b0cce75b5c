use alumnet::cli::{Cli, Commands, create_admin};
use alumnet::router::init_router;
use alumnet::state::init_app_state;
use alumnet_config::{DatabaseConfig, ServerConfig};
use alumnet_db::{init_db_pool, run_migrations};
use alumnet_observability::init_tracing;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve().await,
        Commands::Migrate => migrate().await,
        Commands::CreateAdmin { email, password } => {
            handle_create_admin(&email, &password).await
        }
    };

    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn serve() -> anyhow::Result<()> {
    let state = init_app_state().await?;
    run_migrations(&state.db).await?;

    if state.jwt_config.uses_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    let server = ServerConfig::from_env();
    let addr = server.addr();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    info!(%addr, "Server running");
    info!("OpenAPI document available at http://{addr}/api-docs/openapi.json");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn migrate() -> anyhow::Result<()> {
    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
    run_migrations(&pool).await?;
    info!("Migrations applied");
    Ok(())
}

async fn handle_create_admin(email: &str, password: &str) -> anyhow::Result<()> {
    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
    run_migrations(&pool).await?;

    let user = create_admin(&pool, email, password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create admin: {}", e.public_message()))?;

    println!("Admin created: {} ({})", user.email, user.id);
    Ok(())
}
