use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use contact_relay::app::create_app;
use contact_relay::config::RelayConfig;
use contact_relay::state::SharedAppState;
use contact_relay::utils::init_email_provider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("contact_relay=info,tower_http=info")),
    )
    .init();

  let config = RelayConfig::from_env()?;

  let provider = init_email_provider(&config)?;
  let app_state = SharedAppState::new(provider, &config);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

  tracing::info!("Server running on http://{}", config.bind_address);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install signal handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
