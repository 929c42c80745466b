// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livegauge_core::{CancellationToken, GaugeTask};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_join_returns_output() {
    let task = GaugeTask::spawn(|_cancel| async { 6954_i64 });

    assert_eq!(task.join().await, Some(6954));
}

#[tokio::test]
async fn test_cancel_stops_cooperative_task() {
    let task = GaugeTask::spawn(|cancel| async move {
        let mut ticks = 0_u32;
        loop {
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(5)) => ticks += 1,
                _ = cancel.cancelled() => break ticks,
            }
        }
    });

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(task.cancel());
    assert!(!task.cancel());

    assert!(task.join().await.is_some());
}

#[tokio::test]
async fn test_drop_cancels_token() {
    let observed = Arc::new(AtomicBool::new(false));
    let flag = observed.clone();
    let token = CancellationToken::new();

    let task = GaugeTask::with_token(token.clone(), move |cancel| async move {
        cancel.cancelled().await;
        flag.store(true, Ordering::SeqCst);
    });
    drop(task);

    assert!(token.is_cancelled());
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(observed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_join_reports_panic_as_none() {
    let task = GaugeTask::spawn(|_cancel| async {
        panic!("feed task failed");
    });

    let result: Option<()> = task.join().await;
    assert!(result.is_none());
}
