// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod gauge_task;
pub mod step_source;
pub mod update_payload;
pub mod update_sink;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::gauge_task::GaugeTask;
pub use self::step_source::{RandomSteps, StepSource};
pub use self::update_payload::UpdatePayload;
pub use self::update_sink::UpdateSink;
pub use livegauge_error::{LiveGaugeError, Result, ResultExt};
