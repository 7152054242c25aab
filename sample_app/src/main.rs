//! Serves the sample application.

use mk_framework::{init_tracing, FrameworkConfig};
use tokio::net::TcpListener;

use todo_app::{build_app, Stores};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("todo_app=info,mk_framework=info");

    let config = FrameworkConfig::from_env()?;
    let bind_addr = config.bind_addr.clone();
    tracing::info!(environment = ?config.environment, routes = %config.routes_path.display(), "starting");

    let app = build_app(config, &Stores::default())?;
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app.router()).await?;
    Ok(())
}
