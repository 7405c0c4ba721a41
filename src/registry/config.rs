//! Registry configuration

use std::time::Duration;

/// Default maximum age of a tunnel before the sweep evicts it
pub const DEFAULT_TUNNEL_TTL: Duration = Duration::from_secs(17 * 60);

/// Default interval between sweeps when using
/// [`TunnelRegistry::spawn_cleanup_task`](super::TunnelRegistry::spawn_cleanup_task)
pub const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Shortest interval the cleanup task will tick at
pub const MIN_CLEANUP_INTERVAL: Duration = Duration::from_millis(1);

/// Tunnel registry configuration
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Maximum age of a tunnel; older tunnels are completed and removed by cleanup
    pub tunnel_ttl: Duration,

    /// How often the background cleanup task runs
    pub cleanup_interval: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            tunnel_ttl: DEFAULT_TUNNEL_TTL,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
        }
    }
}

impl RegistryConfig {
    /// Set the tunnel time-to-live
    pub fn tunnel_ttl(mut self, ttl: Duration) -> Self {
        self.tunnel_ttl = ttl;
        self
    }

    /// Set the cleanup interval (at least `MIN_CLEANUP_INTERVAL`)
    pub fn cleanup_interval(mut self, interval: Duration) -> Self {
        self.cleanup_interval = interval.max(MIN_CLEANUP_INTERVAL);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();

        assert_eq!(config.tunnel_ttl, Duration::from_secs(1020));
        assert_eq!(config.cleanup_interval, DEFAULT_CLEANUP_INTERVAL);
    }

    #[test]
    fn test_builder_cleanup_interval_floored() {
        let config = RegistryConfig::default().cleanup_interval(Duration::ZERO);

        assert_eq!(config.cleanup_interval, MIN_CLEANUP_INTERVAL);
    }

    #[test]
    fn test_builder_chaining() {
        let config = RegistryConfig::default()
            .tunnel_ttl(Duration::from_secs(30))
            .cleanup_interval(Duration::from_secs(5));

        assert_eq!(config.tunnel_ttl, Duration::from_secs(30));
        assert_eq!(config.cleanup_interval, Duration::from_secs(5));
    }
}
