use clap::Parser;
use poem::{listener::TcpListener, Server};

use item_catalog_backend::api;
use item_catalog_backend::app_data::AppData;
use item_catalog_backend::cli::{migrate, Cli, Commands};
use item_catalog_backend::config::{init_logging, BootstrapSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();

    // Configuration errors are fatal: nothing is served with a broken setup
    let settings = BootstrapSettings::from_env().inspect_err(|e| {
        tracing::error!("Invalid startup configuration: {}", e);
    })?;
    tracing::debug!("Loaded settings: {:?}", settings);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(settings).await,
        Commands::Migrate(command) => migrate::run_migration_command(&settings, command).await,
    }
}

async fn serve(settings: BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    let app_data = AppData::init(&settings).await.inspect_err(|e| {
        tracing::error!("Startup failed: {}", e);
    })?;

    let address = settings.server_address();
    let server_url = format!("http://{}", address);
    let app = api::build_app(&app_data, &server_url);

    tracing::info!("Starting server on {}", server_url);
    tracing::info!("Swagger UI available at {}/docs", server_url);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
