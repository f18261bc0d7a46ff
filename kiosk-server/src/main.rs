use kiosk_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = setup_environment();
    print_banner();

    tracing::info!(
        environment = %config.environment,
        settings = %config.settings_path,
        "Starting print server"
    );

    let state = ServerState::initialize(&config).await?;
    Server::new(config, state).run().await?;

    Ok(())
}
