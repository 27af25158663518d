use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tower_http::cors::CorsLayer;

use scorecard_lib::scorecard_fec::FecClient;
use scorecard_lib::Fetcher;
use scorecard_server::routes;
use scorecard_server::routes::AppState;

#[derive(Parser)]
#[command(name = "scorecard-server")]
#[command(about = "Serve big-money contribution analysis for federal candidates")]
struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5000, env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scorecard_server=info".parse().unwrap())
                .add_directive("scorecard_lib=info".parse().unwrap())
                .add_directive("scorecard_fec=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let api_key = std::env::var("FEC_API_KEY").unwrap_or_else(|_| "DEMO_KEY".to_string());
    if api_key == "DEMO_KEY" {
        tracing::warn!("FEC_API_KEY not set, falling back to DEMO_KEY rate limits");
    }

    let client = FecClient::new(api_key)?;
    let state = AppState {
        fetcher: Arc::new(Fetcher::new(client)),
    };

    let app = routes::router(state).layer(CorsLayer::permissive());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
