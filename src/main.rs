use std::sync::Arc;

use tracing::{error, info};

use bing_wallpaper::bing::{start_wallpaper_updater, BingClient, WallpaperUpdater};
use bing_wallpaper::web::{AppState, WebServer};
use bing_wallpaper::{Config, Database};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = bing_wallpaper::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        bing_wallpaper::logging::init_console_only(&config.logging.level);
    }

    info!("Bing Wallpaper");

    if let Err(e) = run(config).await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> bing_wallpaper::Result<()> {
    config.validate()?;

    let db = Arc::new(Database::open(&config.database.path).await?);
    let client = Arc::new(BingClient::new(&config.bing)?);

    let updater = WallpaperUpdater::new(Arc::clone(&db), Arc::clone(&client), &config.bing)?;
    start_wallpaper_updater(updater);

    let app_state = AppState::new(db, client, config.site.clone());
    let server = WebServer::new(&config.server, &config.web, app_state)?;
    info!(
        "Server configured on {}:{}",
        config.server.host, config.server.port
    );
    server.run().await
}
