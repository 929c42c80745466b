// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::time::Duration;

use crate::timer::Timer;

/// Timer backed by the Tokio clock.
///
/// `now` reads `tokio::time::Instant` so that `tokio::time::pause` and
/// `advance` move it together with the sleeps.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_follows_paused_clock() {
        let timer = TokioTimer;
        let start = timer.now();

        timer.sleep_future(Duration::from_millis(25_000)).await;

        assert!(timer.now() - start >= Duration::from_millis(25_000));
    }
}
