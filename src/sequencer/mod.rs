//! The timed order-processing sequence.
//!
//! A [`ProcessingRun`] is one execution of the fixed four-stage schedule. Every
//! scheduled point is an independent timer at an absolute offset from run start;
//! stages are never chained off each other. Cancelling a run aborts all of its
//! pending timers as a unit, so a torn-down run can emit no further ticks. Ticks
//! carry the [`RunId`] that scheduled them, letting the receiver drop anything
//! from a superseded run.

use std::fmt::Display;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// One labeled step of the processing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    /// Offset from run start at which the stage is reached.
    pub offset: Duration,
    pub label: &'static str,
}

/// The fixed schedule. The sequence has no branching and no failure states; once
/// started it always reaches completion unless cancelled.
pub const STAGES: [Stage; 4] = [
    Stage { offset: Duration::from_millis(0), label: "Processing order" },
    Stage { offset: Duration::from_millis(1000), label: "Preparing ingredients" },
    Stage { offset: Duration::from_millis(2500), label: "Mixing order" },
    Stage { offset: Duration::from_millis(3500), label: "Order ready" },
];

/// Offset from run start at which the completion signal fires.
pub const COMPLETION_OFFSET: Duration = Duration::from_millis(4000);

/// Identifies one execution of the sequence, from start to completion or
/// cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(pub u64);

impl Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "run_{}", self.0)
    }
}

/// What a run timer reports back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A stage was reached; the value indexes into [`STAGES`].
    Stage(usize),
    /// The sequence finished and the pending order may be finalized.
    Completed,
}

/// A tick tagged with the run that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunTick {
    pub run: RunId,
    pub tick: Tick,
}

/// One cancellable execution of the processing sequence.
///
/// Owns the spawned timer tasks. [`cancel`](ProcessingRun::cancel) aborts whatever
/// is still pending; dropping the run does the same, so leaving the processing
/// state tears the timers down with it.
#[derive(Debug)]
pub struct ProcessingRun {
    id: RunId,
    handles: Vec<JoinHandle<()>>,
}

impl ProcessingRun {
    /// Spawns the stage timers and the completion timer for a fresh run.
    pub fn start(id: RunId, ticks: mpsc::UnboundedSender<RunTick>) -> Self {
        let mut handles = Vec::with_capacity(STAGES.len() + 1);

        for (index, stage) in STAGES.iter().enumerate() {
            let ticks = ticks.clone();
            let offset = stage.offset;
            handles.push(tokio::spawn(async move {
                tokio::time::sleep(offset).await;
                let _ = ticks.send(RunTick { run: id, tick: Tick::Stage(index) });
            }));
        }

        handles.push(tokio::spawn(async move {
            tokio::time::sleep(COMPLETION_OFFSET).await;
            let _ = ticks.send(RunTick { run: id, tick: Tick::Completed });
        }));

        debug!(%id, timers = handles.len(), "Processing run started");
        Self { id, handles }
    }

    pub fn id(&self) -> RunId {
        self.id
    }

    /// Aborts every pending timer of this run. Timers that already fired are
    /// unaffected; none will fire afterwards. Calling this twice is harmless.
    pub fn cancel(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        debug!(id = %self.id, "Processing run cancelled");
    }
}

impl Drop for ProcessingRun {
    fn drop(&mut self) {
        self.cancel();
    }
}
