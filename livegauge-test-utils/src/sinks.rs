// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livegauge_core::{UpdatePayload, UpdateSink};
use livegauge_error::{LiveGaugeError, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Sink that stores every payload; clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    log: Arc<Mutex<Vec<UpdatePayload>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payloads(&self) -> Vec<UpdatePayload> {
        self.log.lock().clone()
    }

    pub fn values(&self) -> Vec<i64> {
        self.log.lock().iter().map(|payload| payload.value).collect()
    }

    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }
}

impl UpdateSink for RecordingSink {
    fn update(&mut self, payload: &UpdatePayload) -> Result<()> {
        self.log.lock().push(*payload);
        Ok(())
    }
}

/// Sink forwarding payloads to an unbounded channel.
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<UpdatePayload>,
}

/// Create a [`ChannelSink`] and the receiver observing it.
pub fn channel_sink() -> (ChannelSink, mpsc::UnboundedReceiver<UpdatePayload>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelSink { tx }, rx)
}

impl UpdateSink for ChannelSink {
    fn update(&mut self, payload: &UpdatePayload) -> Result<()> {
        self.tx
            .send(*payload)
            .map_err(|_| LiveGaugeError::sink("receiver dropped"))
    }
}

/// Sink that accepts `accept` updates and rejects every later one.
#[derive(Clone, Debug)]
pub struct FailingSink {
    inner: RecordingSink,
    accept: usize,
    attempts: Arc<Mutex<usize>>,
}

impl FailingSink {
    pub fn after(accept: usize) -> Self {
        Self {
            inner: RecordingSink::new(),
            accept,
            attempts: Arc::new(Mutex::new(0)),
        }
    }

    /// Payloads that were accepted.
    pub fn accepted(&self) -> Vec<UpdatePayload> {
        self.inner.payloads()
    }

    /// Every call, accepted or not.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock()
    }
}

impl UpdateSink for FailingSink {
    fn update(&mut self, payload: &UpdatePayload) -> Result<()> {
        let attempt = {
            let mut attempts = self.attempts.lock();
            *attempts += 1;
            *attempts
        };
        if attempt > self.accept {
            return Err(LiveGaugeError::sink(format!("rejected update #{attempt}")));
        }
        self.inner.update(payload)
    }
}
