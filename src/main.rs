use anyhow::Result;
use tracing_subscriber::EnvFilter;
use vastdime_web::config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    vastdime_web::server::run(config).await
}

fn init_tracing(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        "json" => builder.json().init(),
        _ => builder.init(),
    }

    Ok(())
}
