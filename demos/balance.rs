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

    let client = SmmClient::new(ApiKey::new(api_key)?);
    let balance = client.user_balance().await?;

    println!("balance: {} {}", balance.balance, balance.currency);

    Ok(())
}
