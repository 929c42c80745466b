// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Background task handle with cooperative cancellation.

use crate::CancellationToken;
use core::future::Future;
use tokio::task::JoinHandle;

/// Owned handle to a spawned feed task.
///
/// The spawned future receives a [`CancellationToken`] and is expected to
/// return at its next checkpoint once the token fires. Dropping the handle
/// cancels the token; it does not abort the task.
///
/// # Example
///
/// ```rust
/// use livegauge_core::GaugeTask;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let task = GaugeTask::spawn(|cancel| async move {
///     cancel.cancelled().await;
///     7
/// });
///
/// task.cancel();
/// assert_eq!(task.join().await, Some(7));
/// # }
/// ```
#[derive(Debug)]
pub struct GaugeTask<T> {
    cancel: CancellationToken,
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> GaugeTask<T> {
    /// Spawn `f` on the current Tokio runtime.
    ///
    /// Must be called from within a runtime context.
    pub fn spawn<F, Fut>(f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::with_token(CancellationToken::new(), f)
    }

    /// Spawn `f` observing an existing token.
    pub fn with_token<F, Fut>(cancel: CancellationToken, f: F) -> Self
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        let handle = tokio::spawn(f(cancel.clone()));
        Self {
            cancel,
            handle: Some(handle),
        }
    }
}

impl<T> GaugeTask<T> {
    /// Request cancellation without waiting.
    ///
    /// Returns `true` only for the call that actually cancelled.
    pub fn cancel(&self) -> bool {
        self.cancel.cancel()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    pub fn token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Wait for the task to return.
    ///
    /// `None` means the task panicked or was aborted by the runtime.
    pub async fn join(mut self) -> Option<T> {
        let handle = self.handle.take()?;
        handle.await.ok()
    }
}

impl<T> Drop for GaugeTask<T> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
