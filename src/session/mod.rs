//! Session module - sample recording and results persistence

mod recorder;
mod sink;

pub use recorder::{Sample, Session};
pub use sink::{FileSink, SinkError};
