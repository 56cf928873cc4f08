use std::io::Write;

use crate::pipeline::BoxError;
use crate::report::FrameRecord;

/// Receiver of per-frame results. Delivery is fire-and-forget: the pipeline
/// does not retry a failed push.
pub trait Sink {
    fn push(&mut self, record: &FrameRecord) -> Result<(), BoxError>;
}

/// Writes one JSON object per frame, newline separated.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for JsonLinesSink<W> {
    fn push(&mut self, record: &FrameRecord) -> Result<(), BoxError> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every pushed record.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub records: Vec<FrameRecord>,
}

impl Sink for MemorySink {
    fn push(&mut self, record: &FrameRecord) -> Result<(), BoxError> {
        self.records.push(record.clone());
        Ok(())
    }
}
