//! In-process registry of stream tunnels
//!
//! A tunnel is a readable stream registered under a string id. Producers add
//! tunnels, consumers look them up and read them, and a periodic sweep tears
//! down tunnels that outlive their TTL, releasing anyone waiting on them.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tunnel_registry::TunnelRegistry;
//!
//! # async fn run() -> std::io::Result<()> {
//! let registry = Arc::new(TunnelRegistry::new());
//! let _sweeper = registry.spawn_cleanup_task();
//!
//! let handle = registry.register("upload-1", &b"hello"[..]).await;
//!
//! if let Some(tunnel) = registry.get("upload-1").await {
//!     let mut buf = [0u8; 64];
//!     let n = tunnel.read(&mut buf).await?;
//!     println!("read {} bytes", n);
//!     tunnel.complete().ok();
//! }
//!
//! handle.wait().await;
//! registry.remove("upload-1").await;
//! # Ok(())
//! # }
//! ```

pub mod registry;

pub use registry::{
    RegistryConfig, TunnelError, TunnelHandle, TunnelId, TunnelRegistry, DEFAULT_TUNNEL_TTL,
};
