//! Batch Dispatch
//!
//! Encodes an [`EventSequence`] to the wire layout and hands it to the
//! OS in a single call. The OS reports only how many records it
//! accepted; a shortfall is surfaced as partial acceptance with no
//! cause attached, because none exists at this layer.

use crate::error::{Result, SynthError};
use crate::platform::InputSink;
use crate::record::EventRecord;
use crate::wire;
use tracing::{debug, warn};

/// Outcome of one injection call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitReport {
    /// Records handed to the OS
    pub submitted: u32,
    /// Records the OS accepted, in order from the front of the batch
    pub accepted: u32,
}

impl SubmitReport {
    /// Whether every submitted record was accepted
    pub fn complete(&self) -> bool {
        self.accepted == self.submitted
    }

    /// Records the OS refused
    pub fn rejected(&self) -> u32 {
        self.submitted - self.accepted
    }
}

/// Submit a sequence in one atomic-ordered batch
///
/// An empty sequence is a successful no-op. Accepted records cannot be
/// undone even when later records in the same batch are refused.
pub fn submit(sequence: &[EventRecord], sink: &dyn InputSink) -> SubmitReport {
    let batch = wire::encode_batch(sequence);
    let submitted = batch.len() as u32;
    let accepted = sink.inject(&batch);

    let report = SubmitReport {
        submitted,
        accepted,
    };
    if report.complete() {
        debug!(submitted, "injected batch");
    } else {
        warn!(submitted, accepted, "batch partially accepted");
    }
    report
}

/// Submit a sequence and treat any shortfall as an error
pub fn submit_all(sequence: &[EventRecord], sink: &dyn InputSink) -> Result<()> {
    let report = submit(sequence, sink);
    if report.complete() {
        Ok(())
    } else {
        Err(SynthError::PartialInjection {
            accepted: report.accepted,
            submitted: report.submitted,
        })
    }
}
