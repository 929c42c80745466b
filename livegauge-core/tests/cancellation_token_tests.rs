// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::FutureExt;
use livegauge_core::CancellationToken;
use std::time::Duration;

#[test]
fn test_new_token_not_cancelled() {
    let token = CancellationToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn test_first_cancel_reports_transition() {
    let token = CancellationToken::new();
    assert!(token.cancel());
    assert!(!token.cancel());
    assert!(!token.cancel());
    assert!(token.is_cancelled());
}

#[test]
fn test_clone_shares_state() {
    let token = CancellationToken::new();
    let clone = token.clone();

    assert!(clone.cancel());

    assert!(token.is_cancelled());
    assert!(!token.cancel());
}

#[test]
fn test_cancelled_pending_until_cancel() {
    let token = CancellationToken::new();
    assert!(token.cancelled().now_or_never().is_none());

    token.cancel();
    assert!(token.cancelled().now_or_never().is_some());
}

#[tokio::test]
async fn test_cancelled_wakes_waiting_task() {
    let token = CancellationToken::new();
    let waiter = token.clone();

    let handle = tokio::spawn(async move {
        waiter.cancelled().await;
        true
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    token.cancel();

    assert!(handle.await.unwrap());
}
