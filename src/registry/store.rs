//! Tunnel registry implementation
//!
//! The central map from tunnel id to handle, plus the TTL sweep that tears
//! down abandoned tunnels.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use tokio::io::AsyncRead;
use tokio::sync::RwLock;

use super::config::{RegistryConfig, MIN_CLEANUP_INTERVAL};
use super::handle::TunnelHandle;
use super::id::TunnelId;

/// Registry of all live tunnels
///
/// Thread-safe via a single `RwLock`. Lookups and counts share the read lock;
/// every mutation, including the cleanup sweep, takes the write lock.
pub struct TunnelRegistry {
    /// Map of tunnel id to handle
    tunnels: RwLock<HashMap<TunnelId, Arc<TunnelHandle>>>,

    /// Configuration
    config: RegistryConfig,
}

impl TunnelRegistry {
    /// Create a new tunnel registry with default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a new tunnel registry with custom configuration
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            tunnels: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// Get the registry configuration
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Add a tunnel, replacing any existing tunnel with the same id
    ///
    /// The replaced handle is returned as-is; it is not completed.
    pub async fn add(
        &self,
        id: impl Into<TunnelId>,
        handle: Arc<TunnelHandle>,
    ) -> Option<Arc<TunnelHandle>> {
        let id = id.into();
        let mut tunnels = self.tunnels.write().await;

        let previous = tunnels.insert(id.clone(), handle);

        if previous.is_some() {
            tracing::debug!(tunnel = %id, "Tunnel replaced");
        } else {
            tracing::info!(tunnel = %id, tunnels = tunnels.len(), "Tunnel added");
        }

        previous
    }

    /// Wrap `stream` in a new handle and add it under `id`
    pub async fn register<S>(&self, id: impl Into<TunnelId>, stream: S) -> Arc<TunnelHandle>
    where
        S: AsyncRead + Send + Unpin + 'static,
    {
        let handle = Arc::new(TunnelHandle::new(stream));
        self.add(id, Arc::clone(&handle)).await;
        handle
    }

    /// Look up a tunnel by id
    pub async fn get(&self, id: &str) -> Option<Arc<TunnelHandle>> {
        self.tunnels.read().await.get(id).cloned()
    }

    /// Check if a tunnel is registered under `id`
    pub async fn contains(&self, id: &str) -> bool {
        self.tunnels.read().await.contains_key(id)
    }

    /// Remove a tunnel
    ///
    /// Does nothing if the id is unknown. The removed handle is not completed;
    /// callers that need waiters released must call
    /// [`TunnelHandle::complete`] themselves.
    pub async fn remove(&self, id: &str) -> Option<Arc<TunnelHandle>> {
        let removed = self.tunnels.write().await.remove(id);

        if removed.is_some() {
            tracing::debug!(tunnel = id, "Tunnel removed");
        }

        removed
    }

    /// Get total number of tunnels
    pub async fn count(&self) -> usize {
        self.tunnels.read().await.len()
    }

    /// Run cleanup once
    ///
    /// Completes and removes every tunnel older than `tunnel_ttl`, holding the
    /// write lock for the whole pass. Returns the number of tunnels evicted.
    pub async fn cleanup(&self) -> usize {
        let mut tunnels = self.tunnels.write().await;
        let ttl = self.config.tunnel_ttl;
        let before = tunnels.len();

        tunnels.retain(|id, handle| {
            if !handle.is_expired(ttl) {
                return true;
            }

            // Owner may have completed it already; it still has to go.
            if let Err(e) = handle.complete() {
                tracing::debug!(tunnel = %id, error = %e, "Expired tunnel not signaled");
            }

            tracing::info!(
                tunnel = %id,
                age_secs = handle.age().as_secs(),
                "Tunnel removed by cleanup"
            );
            false
        });

        let evicted = before - tunnels.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = tunnels.len(), "Cleanup finished");
        }

        evicted
    }

    /// Spawn background cleanup task
    ///
    /// Runs [`cleanup`](Self::cleanup) every `cleanup_interval`. The task only
    /// holds a weak reference and exits once the registry is dropped. Returns a
    /// handle that can be used to abort the task earlier.
    pub fn spawn_cleanup_task(self: &Arc<Self>) -> tokio::task::JoinHandle<()> {
        let registry: Weak<Self> = Arc::downgrade(self);
        // `interval` panics on a zero period; the field is public so floor it here too.
        let interval = self.config.cleanup_interval.max(MIN_CLEANUP_INTERVAL);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let Some(registry) = registry.upgrade() else {
                    tracing::debug!("Registry dropped, stopping cleanup task");
                    break;
                };
                registry.cleanup().await;
            }
        })
    }
}

impl Default for TunnelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
