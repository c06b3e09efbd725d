use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

struct Windows {
    clients: HashMap<IpAddr, Vec<Instant>>,
    last_sweep: Instant,
}

/// Per-IP sliding window rate limiter held in memory.
///
/// Each check only prunes the caller's own timestamps. Clients that went
/// idle are swept at most once per window.
#[derive(Clone)]
pub struct RateLimiter {
    state: Arc<Mutex<Windows>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window_secs: u64) -> Self {
        Self {
            state: Arc::new(Mutex::new(Windows {
                clients: HashMap::new(),
                last_sweep: Instant::now(),
            })),
            max_requests,
            window: Duration::from_secs(window_secs),
        }
    }

    /// Record a request from `ip`. Returns false once the window is full.
    pub async fn check(&self, ip: IpAddr) -> bool {
        let mut state = self.state.lock().await;
        let now = Instant::now();
        let window = self.window;

        if now.duration_since(state.last_sweep) >= window {
            state.clients.retain(|_, stamps| {
                stamps
                    .last()
                    .is_some_and(|t| now.duration_since(*t) < window)
            });
            state.last_sweep = now;
        }

        let timestamps = state.clients.entry(ip).or_default();
        timestamps.retain(|t| now.duration_since(*t) < window);
        if timestamps.len() >= self.max_requests {
            return false;
        }

        timestamps.push(now);
        true
    }
}
