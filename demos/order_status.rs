use std::io;

use redditsmm::{ApiKey, OrderId, SmmClient};
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
    let orders_raw = std::env::var("REDDITSMM_ORDERS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "REDDITSMM_ORDERS environment variable is required (comma-separated ids)",
        )
    })?;

    let orders = orders_raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(OrderId::from)
        .collect::<Vec<_>>();

    let client = SmmClient::new(ApiKey::new(api_key)?);

    if let [order] = orders.as_slice() {
        let status = client.order_status(order).await?;
        println!(
            "{order}: status={} charge={} {} start_count={} remains={}",
            status.status, status.charge, status.currency, status.start_count, status.remains
        );
        return Ok(());
    }

    for (order, status) in client.multiple_orders_status(&orders).await? {
        match status.error {
            Some(error) => println!("{order}: error: {error}"),
            None => println!(
                "{order}: status={} charge={} {} start_count={} remains={}",
                status.status, status.charge, status.currency, status.start_count, status.remains
            ),
        }
    }

    Ok(())
}
