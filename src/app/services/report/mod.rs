//! Report rendering for analysis outcomes
//!
//! The emitter is the last collaborator in the pipeline: it turns an
//! [`AnalysisOutcome`](crate::app::models::AnalysisOutcome) into text for the
//! terminal. Rendering is separate from printing so the text can be tested
//! without a terminal.

pub mod emitter;

pub use emitter::{OutputFormat, ReportEmitter, render_human, render_json};
