use log::info;
use mdgate_gateway::{GatewayConfigFile, load_config, load_default_config};
use mdgate_runner::{bootstrap, subscribe_all};

fn print_help() {
    eprintln!(
        r#"mdgate-runner - FIX market data subscription gateway

USAGE:
    mdgate-runner [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    MDGATE_CONFIG       Configuration file (used when --config is absent)
    RUST_LOG            Log level filter (default: info)
"#
    );
}

fn load(config_path: Option<String>) -> anyhow::Result<GatewayConfigFile> {
    let config = match config_path.or_else(|| std::env::var("MDGATE_CONFIG").ok()) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            load_config(path)?
        }
        None => {
            info!("Using embedded default configuration");
            load_default_config()?
        }
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(path.clone()),
                    None => anyhow::bail!("--config requires a path argument"),
                }
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
        i += 1;
    }

    let config = load(config_path)?;
    let gateway = bootstrap(&config)?;

    // Stand-in for the wire side: log every request the session queues
    let mut outbound = gateway.outbound;
    let wire = tokio::spawn(async move {
        while let Some(request) = outbound.recv().await {
            info!("-> {}", request);
        }
    });

    subscribe_all(&gateway.service, &gateway.tickers, true);

    info!("Subscribed; press Ctrl-C to unsubscribe and exit");
    tokio::signal::ctrl_c().await?;

    subscribe_all(&gateway.service, &gateway.tickers, false);

    // Dropping every sender closes the queue and ends the wire task
    gateway.session.logout();
    drop(gateway.service);
    drop(gateway.session);
    wire.await?;

    info!("Shutdown complete");
    Ok(())
}
