use clap::Parser;
use std::net::SocketAddr;

use server::Config;

#[derive(Parser)]
#[command(name = "holoclip", version)]
#[command(about = "YouTube channel registration server", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Database file path
    #[arg(short, long, default_value = "holoclip.db")]
    database: String,

    /// Maximum number of pooled database connections
    #[arg(long, default_value = "5")]
    max_connections: u32,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true, default_value = "")]
    youtube_api_key: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("holoclip v{}", env!("CARGO_PKG_VERSION"));

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let database_url = format!("sqlite:{}?mode=rwc", cli.database);
    let config = Config::new(database_url, cli.youtube_api_key)
        .with_max_connections(cli.max_connections);

    server::run_server(addr, config).await
}
