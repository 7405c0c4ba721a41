//! Tunnel handle
//!
//! A handle owns one readable stream together with its creation time and a
//! one-shot completion signal. Readers pull bytes through [`TunnelHandle::read`]
//! while any number of tasks can park on [`TunnelHandle::wait`] until the
//! tunnel is torn down.

use std::io;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::{watch, Mutex};
use tokio::time::Instant;

use super::error::TunnelError;

/// Boxed stream carried by a tunnel
pub type TunnelStream = Box<dyn AsyncRead + Send + Unpin>;

/// A registered tunnel: stream, creation time and completion signal
pub struct TunnelHandle {
    /// Wrapped stream; the mutex keeps reads single-reader
    stream: Mutex<TunnelStream>,

    /// When the handle was created
    created_at: Instant,

    /// Completion flag, flipped to `true` exactly once
    done_tx: watch::Sender<bool>,
}

impl TunnelHandle {
    /// Create a new handle around `stream`, timestamped now
    pub fn new<S>(stream: S) -> Self
    where
        S: AsyncRead + Send + Unpin + 'static,
    {
        Self::with_created_at(stream, Instant::now())
    }

    /// Create a new handle with an explicit creation time
    pub fn with_created_at<S>(stream: S, created_at: Instant) -> Self
    where
        S: AsyncRead + Send + Unpin + 'static,
    {
        let (done_tx, _) = watch::channel(false);

        Self {
            stream: Mutex::new(Box::new(stream)),
            created_at,
            done_tx,
        }
    }

    /// Read from the wrapped stream
    ///
    /// Results are passed through untouched: `Ok(0)` is end of stream and
    /// errors come straight from the underlying reader. Concurrent callers
    /// are serialized.
    pub async fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        self.stream.lock().await.read(buf).await
    }

    /// Read from the wrapped stream into a growable buffer
    pub async fn read_buf(&self, buf: &mut BytesMut) -> io::Result<usize> {
        self.stream.lock().await.read_buf(buf).await
    }

    /// Wait until the tunnel is completed
    ///
    /// Returns immediately if it already is. Every waiter is released by a
    /// single [`complete`](Self::complete).
    pub async fn wait(&self) {
        let mut rx = self.done_tx.subscribe();
        // The sender is owned by `self`, so the channel cannot close here.
        let _ = rx.wait_for(|done| *done).await;
    }

    /// Signal completion, releasing all current and future waiters
    ///
    /// A handle completes at most once. Calling this again returns
    /// [`TunnelError::AlreadyCompleted`] and changes nothing.
    pub fn complete(&self) -> Result<(), TunnelError> {
        let first = self
            .done_tx
            .send_if_modified(|done| !std::mem::replace(done, true));

        if first {
            Ok(())
        } else {
            Err(TunnelError::AlreadyCompleted)
        }
    }

    /// Check whether the tunnel has been completed
    pub fn is_completed(&self) -> bool {
        *self.done_tx.borrow()
    }

    /// When the handle was created
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Time elapsed since creation
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Check whether the handle is older than `ttl`
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}

impl std::fmt::Debug for TunnelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TunnelHandle")
            .field("created_at", &self.created_at)
            .field("completed", &self.is_completed())
            .finish_non_exhaustive()
    }
}
