use std::io;

use redditsmm::{ApiKey, SmmClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("REDDITSMM_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "REDDITSMM_API_KEY environment variable is required",
        )
    })?;
    // Optional substring filter on the category, e.g. `Reddit`.
    let category = std::env::var("REDDITSMM_CATEGORY").ok();

    let client = SmmClient::new(ApiKey::new(api_key)?);
    let services = client.services().await?;

    for service in services.iter().filter(|service| {
        category
            .as_deref()
            .is_none_or(|category| service.category.contains(category))
    }) {
        println!(
            "{:>6}  {:<12} {:<40} rate={} min={} max={}",
            service.service, service.kind, service.name, service.rate, service.min, service.max
        );
    }

    Ok(())
}
