//! Report output
//!
//! Sinks receive finished lines; [`Render`] turns query rows into lines.

mod render;
mod sink;

pub use render::{Render, render_all};
pub use sink::{BufferSink, ReportSink, StdoutSink, WriterSink, stdout_sink};
