use anyhow::Result;
use clap::Parser;
use dev_utility_hub::config::{self, Config};
use dev_utility_hub::server;
use tracing_subscriber::EnvFilter;

/// Dev Utility Hub HTTP server.
#[derive(Parser)]
#[command(name = "dev-utility-hub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind host, overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides PORT
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = config::load_from_env()?;
    apply_overrides(&mut config, cli);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

fn apply_overrides(config: &mut Config, cli: Cli) {
    if let Some(host) = cli.host {
        config.host = host;
    }

    if let Some(port) = cli.port {
        config.port = port;
        if std::env::var("BASE_URL").is_err() {
            config.base_url = format!("http://localhost:{}", port);
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
