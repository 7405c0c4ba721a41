//! Tunnel registry walkthrough
//!
//! Run with: cargo run --example tunnel_relay
//!
//! A producer registers a few in-memory streams, a consumer drains one of
//! them, and the cleanup task expires the rest after a short TTL, waking the
//! producer that is waiting on them.

use std::sync::Arc;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::AsyncWriteExt;
use tunnel_registry::{RegistryConfig, TunnelRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tunnel_registry=debug".parse()?)
                .add_directive("tunnel_relay=info".parse()?),
        )
        .init();

    let config = RegistryConfig::default()
        .tunnel_ttl(Duration::from_secs(2))
        .cleanup_interval(Duration::from_millis(500));
    let registry = Arc::new(TunnelRegistry::with_config(config));
    let sweeper = registry.spawn_cleanup_task();

    // A tunnel fed by a pipe, consumed and completed by the reader
    let (mut writer, reader) = tokio::io::duplex(1024);
    let piped = registry.register("piped", reader).await;

    tokio::spawn(async move {
        for chunk in ["first ", "second ", "third"] {
            if writer.write_all(chunk.as_bytes()).await.is_err() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });

    let consumer = {
        let registry = Arc::clone(&registry);
        tokio::spawn(async move {
            let Some(tunnel) = registry.get("piped").await else {
                return;
            };

            let mut received = BytesMut::new();
            loop {
                match tunnel.read_buf(&mut received).await {
                    Ok(0) => break,
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, "Tunnel read failed");
                        break;
                    }
                }
            }

            tracing::info!(
                bytes = received.len(),
                data = %String::from_utf8_lossy(&received),
                "Consumer drained tunnel"
            );

            registry.remove("piped").await;
            tunnel.complete().ok();
        })
    };

    piped.wait().await;
    tracing::info!("Piped tunnel completed by consumer");
    consumer.await?;

    // Tunnels nobody reads, torn down by the sweep
    let abandoned = registry.register("abandoned", &b"never read"[..]).await;
    registry.register("also-abandoned", tokio::io::empty()).await;
    tracing::info!(tunnels = registry.count().await, "Waiting for expiry");

    abandoned.wait().await;
    tracing::info!(
        tunnels = registry.count().await,
        "Abandoned tunnel completed by cleanup"
    );

    sweeper.abort();
    Ok(())
}
