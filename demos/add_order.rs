use std::io;

use redditsmm::{AddOrder, AddOrderOptions, ApiKey, SmmClient};
use tracing_subscriber::EnvFilter;

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn optional_number(name: &str) -> Result<Option<u32>, Box<dyn std::error::Error>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value.parse()?)),
        Err(_) => Ok(None),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = required("REDDITSMM_API_KEY")?;
    let service = required("REDDITSMM_SERVICE")?;
    let link = required("REDDITSMM_LINK")?;
    let quantity: u64 = required("REDDITSMM_QUANTITY")?.parse()?;
    let options = AddOrderOptions {
        runs: optional_number("REDDITSMM_RUNS")?,
        interval: optional_number("REDDITSMM_INTERVAL")?,
    };

    let client = SmmClient::new(ApiKey::new(api_key)?);
    let request = AddOrder::new(service, link, quantity).with_options(options);
    let order = client.add_order(request).await?;

    println!("order: {order}");

    Ok(())
}
