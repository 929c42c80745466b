// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::timeout;

/// Receive the next item, or `None` if nothing arrives within `timeout_ms`.
pub async fn recv_timeout<T>(rx: &mut UnboundedReceiver<T>, timeout_ms: u64) -> Option<T> {
    timeout(Duration::from_millis(timeout_ms), rx.recv())
        .await
        .ok()
        .flatten()
}

/// Panic if an item arrives within `timeout_ms`.
pub async fn assert_no_recv<T: std::fmt::Debug>(rx: &mut UnboundedReceiver<T>, timeout_ms: u64) {
    tokio::select! {
        item = rx.recv() => {
            if let Some(item) = item {
                panic!("Unexpected item received, expected no output: {item:?}");
            }
        }
        _ = tokio::time::sleep(Duration::from_millis(timeout_ms)) => {}
    }
}
