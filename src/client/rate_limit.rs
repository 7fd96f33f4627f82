//! Client-side rate limiting.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Requests per second allowed by the default limiter.
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Gate awaited once before every outgoing request.
///
/// Implementations must be safe to share between concurrent callers. Pass the
/// same `Arc<dyn RateLimiter>` to several clients to give them one budget.
pub trait RateLimiter: Send + Sync {
    /// Resolve once the caller may send one request.
    fn acquire(&self) -> BoxFuture<'_, ()>;
}

/// Token bucket holding up to `capacity` tokens, refilled one per `interval`.
///
/// Each `acquire` reserves the next free slot under a short lock and then
/// sleeps outside it, so waiters are served in arrival order and never hold
/// the lock while waiting.
pub struct TokenBucket {
    capacity: u32,
    interval: Duration,
    /// Theoretical arrival time of the next request if the bucket were empty.
    next_slot: Mutex<Instant>,
}

impl TokenBucket {
    /// Allow `capacity` requests per `per`, with bursts of up to `capacity`.
    ///
    /// A zero `capacity` is treated as one.
    pub fn new(capacity: u32, per: Duration) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            interval: per / capacity,
            next_slot: Mutex::new(Instant::now()),
        }
    }

    /// Allow `requests` per second.
    pub fn per_second(requests: u32) -> Self {
        Self::new(requests, Duration::from_secs(1))
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    async fn reserve(&self) -> Duration {
        let now = Instant::now();
        let mut next_slot = self.next_slot.lock().await;
        let reserved = (*next_slot).max(now) + self.interval;
        *next_slot = reserved;
        reserved
            .saturating_duration_since(now)
            .saturating_sub(self.interval * self.capacity)
    }
}

impl Default for TokenBucket {
    fn default() -> Self {
        Self::per_second(DEFAULT_REQUESTS_PER_SECOND)
    }
}

impl fmt::Debug for TokenBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenBucket")
            .field("capacity", &self.capacity)
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl RateLimiter for TokenBucket {
    fn acquire(&self) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            let wait = self.reserve().await;
            if !wait.is_zero() {
                tracing::trace!(wait_ms = wait.as_millis() as u64, "rate limit reached, waiting");
                tokio::time::sleep(wait).await;
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn per_second_spreads_capacity_over_one_second() {
        let bucket = TokenBucket::per_second(10);
        assert_eq!(bucket.capacity(), 10);
        assert_eq!(bucket.interval(), Duration::from_millis(100));

        let bucket = TokenBucket::default();
        assert_eq!(bucket.capacity(), DEFAULT_REQUESTS_PER_SECOND);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let bucket = TokenBucket::new(0, Duration::from_secs(2));
        assert_eq!(bucket.capacity(), 1);
        assert_eq!(bucket.interval(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn bucket_admits_burst_then_waits_one_interval() {
        let bucket = TokenBucket::per_second(10);
        let start = Instant::now();

        for _ in 0..10 {
            bucket.acquire().await;
        }
        assert_eq!(start.elapsed(), Duration::ZERO);

        bucket.acquire().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(200), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn bucket_refills_while_idle() {
        let bucket = TokenBucket::per_second(2);
        bucket.acquire().await;
        bucket.acquire().await;

        tokio::time::sleep(Duration::from_secs(1)).await;

        let start = Instant::now();
        bucket.acquire().await;
        bucket.acquire().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_callers_share_one_budget() {
        let bucket = Arc::new(TokenBucket::per_second(10));
        let start = Instant::now();

        let handles = (0..20)
            .map(|_| {
                let bucket = Arc::clone(&bucket);
                tokio::spawn(async move { bucket.acquire().await })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.await.unwrap();
        }

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_secs(1), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1100), "{elapsed:?}");
    }
}
