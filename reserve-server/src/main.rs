use reserve_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv before config so .env values are visible)
    dotenv::dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), None);

    tracing::info!(
        environment = %config.environment,
        "Reserve server starting..."
    );

    // 3. Initialize state (work dir, database pool, JWT service)
    let state = ServerState::initialize(&config)
        .await
        .map_err(|e| anyhow::anyhow!("Initialization failed: {e}"))?;

    // 4. Run the HTTP server
    let server = Server::new(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
