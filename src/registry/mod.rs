//! Tunnel registry
//!
//! The registry maps tunnel ids to handles. Each handle wraps a readable
//! stream and a one-shot completion signal that waiters can park on.
//!
//! # Architecture
//!
//! ```text
//!                         Arc<TunnelRegistry>
//!                     ┌─────────────────────────┐
//!                     │ tunnels: HashMap<Id,    │
//!                     │   Arc<TunnelHandle> {   │
//!                     │     stream,             │
//!                     │     created_at,         │
//!                     │     done: watch::Tx,    │
//!                     │   }                     │
//!                     │ >                       │
//!                     └───────────┬─────────────┘
//!                                 │
//!         ┌───────────────────────┼───────────────────────┐
//!         │                       │                       │
//!         ▼                       ▼                       ▼
//!    [Producer]              [Consumer]              [Sweeper]
//!    registry.add()          registry.get()          registry.cleanup()
//!    handle.wait() ◄──────── handle.read()           handle.complete()
//! ```
//!
//! # Lifetime
//!
//! A tunnel lives until its owner removes it or until it is older than the
//! configured TTL, at which point `cleanup` completes it and drops it from
//! the map. Eviction only makes the tunnel undiscoverable; the stream itself
//! is not closed and any holder of the handle can keep reading.

pub mod config;
pub mod error;
pub mod handle;
pub mod id;
pub mod store;

pub use config::{
    RegistryConfig, DEFAULT_CLEANUP_INTERVAL, DEFAULT_TUNNEL_TTL, MIN_CLEANUP_INTERVAL,
};
pub use error::TunnelError;
pub use handle::{TunnelHandle, TunnelStream};
pub use id::TunnelId;
pub use store::TunnelRegistry;
