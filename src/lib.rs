//! Typed Rust client for the RedditSMM panel HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks (query construction, lenient JSON decoding), and a
//! small client layer that authenticates, rate-limits and sends requests.
//!
//! ```rust,no_run
//! use redditsmm::{AddOrder, ApiKey, SmmClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), redditsmm::SmmError> {
//!     let client = SmmClient::new(ApiKey::new("...")?);
//!     let balance = client.user_balance().await?;
//!     println!("{} {}", balance.balance, balance.currency);
//!
//!     let order = client
//!         .add_order(AddOrder::new("9", "https://reddit.com/r/rust", 100).with_runs(5))
//!         .await?;
//!     let status = client.order_status(&order).await?;
//!     println!("{order}: {}", status.status);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BoxFuture, DEFAULT_HOST, DEFAULT_REQUESTS_PER_SECOND, RateLimiter, SmmClient,
    SmmClientBuilder, SmmError, TokenBucket,
};
pub use domain::{
    AddOrder, AddOrderOptions, ApiKey, Host, OrderId, OrderStatus, Service, ServiceId,
    UserBalance, ValidationError,
};
