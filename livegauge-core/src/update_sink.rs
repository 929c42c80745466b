// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::UpdatePayload;
use livegauge_error::Result;

/// Receiver of simulated values.
///
/// The simulator calls [`update`](UpdateSink::update) at most once per tick.
/// An `Err` is not fatal to the caller's session, but the simulator stops
/// ticking after it.
///
/// Closures work as sinks:
///
/// ```
/// use livegauge_core::{Result, UpdatePayload, UpdateSink};
///
/// let mut seen = Vec::new();
/// let mut sink = |payload: &UpdatePayload| -> Result<()> {
///     seen.push(payload.value);
///     Ok(())
/// };
/// sink.update(&UpdatePayload::new(42)).unwrap();
/// assert_eq!(seen, vec![42]);
/// ```
pub trait UpdateSink: Send {
    fn update(&mut self, payload: &UpdatePayload) -> Result<()>;
}

impl<F> UpdateSink for F
where
    F: FnMut(&UpdatePayload) -> Result<()> + Send,
{
    fn update(&mut self, payload: &UpdatePayload) -> Result<()> {
        self(payload)
    }
}
