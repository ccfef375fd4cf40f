//! Client-side query memoization.
//!
//! A [`CachedQuery`] is the boundary between the presentation layer and the
//! HTTP clients: reads are fetched lazily on first use, held until they go
//! stale or are explicitly invalidated, and concurrent identical reads
//! coalesce into a single underlying request. Failed reads are retried a
//! configurable number of times before the error surfaces to the caller.

use std::future::Future;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

struct Slot<T> {
    value: T,
    fetched_at: Instant,
}

pub struct CachedQuery<T> {
    slot: Mutex<Option<Slot<T>>>,
    stale_after: Option<Duration>,
    retries: u32,
}

impl<T: Clone> CachedQuery<T> {
    /// `stale_after: None` means the value is valid indefinitely until
    /// [`invalidate`](Self::invalidate) is called.
    #[must_use]
    pub fn new(stale_after: Option<Duration>, retries: u32) -> Self {
        Self {
            slot: Mutex::new(None),
            stale_after,
            retries,
        }
    }

    /// Returns the cached value if still fresh, otherwise runs `fetch`.
    ///
    /// The slot lock is held across the fetch, so concurrent identical reads
    /// queue behind the first one and reuse its result instead of issuing
    /// their own requests.
    pub async fn get_or_fetch<F, Fut, E>(&self, fetch: F) -> Result<T, E>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            let fresh = self
                .stale_after
                .map_or(true, |ttl| cached.fetched_at.elapsed() < ttl);
            if fresh {
                return Ok(cached.value.clone());
            }
        }

        let mut attempt = 0;
        loop {
            match fetch().await {
                Ok(value) => {
                    *slot = Some(Slot {
                        value: value.clone(),
                        fetched_at: Instant::now(),
                    });
                    return Ok(value);
                }
                Err(_) if attempt < self.retries => attempt += 1,
                Err(err) => return Err(err),
            }
        }
    }

    /// Drops the cached value; the next read refetches.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_fetch(
        calls: Arc<AtomicUsize>,
        delay: Duration,
    ) -> impl Fn() -> std::pin::Pin<Box<dyn Future<Output = Result<usize, String>> + Send>> {
        move || {
            let calls = calls.clone();
            Box::pin(async move {
                calls.fetch_add(1, Ordering::SeqCst);
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(7)
            })
        }
    }

    #[tokio::test]
    async fn test_second_read_is_served_from_cache() {
        let query = CachedQuery::new(None, 0);
        let calls = Arc::new(AtomicUsize::new(0));
        let fetch = counting_fetch(calls.clone(), Duration::ZERO);

        assert_eq!(query.get_or_fetch(&fetch).await.unwrap(), 7);
        assert_eq!(query.get_or_fetch(&fetch).await.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_identical_reads_deduplicate() {
        let query = Arc::new(CachedQuery::new(None, 0));
        let calls = Arc::new(AtomicUsize::new(0));
        let fetch = counting_fetch(calls.clone(), Duration::from_millis(20));

        let (a, b) = tokio::join!(query.get_or_fetch(&fetch), query.get_or_fetch(&fetch));

        assert_eq!(a.unwrap(), 7);
        assert_eq!(b.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let query = CachedQuery::new(None, 0);
        let calls = Arc::new(AtomicUsize::new(0));
        let fetch = counting_fetch(calls.clone(), Duration::ZERO);

        query.get_or_fetch(&fetch).await.unwrap();
        query.invalidate().await;
        query.get_or_fetch(&fetch).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_value_is_refetched_after_ttl() {
        let query = CachedQuery::new(Some(Duration::from_secs(60)), 0);
        let calls = Arc::new(AtomicUsize::new(0));
        let fetch = counting_fetch(calls.clone(), Duration::ZERO);

        query.get_or_fetch(&fetch).await.unwrap();

        tokio::time::advance(Duration::from_secs(30)).await;
        query.get_or_fetch(&fetch).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        tokio::time::advance(Duration::from_secs(31)).await;
        query.get_or_fetch(&fetch).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_read_retries_up_to_limit() {
        let query: CachedQuery<usize> = CachedQuery::new(None, 1);
        let calls = Arc::new(AtomicUsize::new(0));

        let failing = {
            let calls = calls.clone();
            move || {
                let calls = calls.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err::<usize, String>("boom".to_string())
                }
            }
        };

        assert!(query.get_or_fetch(&failing).await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_retry_recovers_from_transient_failure() {
        let query = CachedQuery::new(None, 1);
        let calls = Arc::new(AtomicUsize::new(0));

        let flaky = {
            let calls = calls.clone();
            move || {
                let attempt = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt == 0 {
                        Err("boom".to_string())
                    } else {
                        Ok(7)
                    }
                }
            }
        };

        assert_eq!(query.get_or_fetch(&flaky).await.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
