//! Core utilities for the FPL CLI
//!
//! - `output`: JSON rendering and file output

pub mod output;

pub use output::{emit_json, render_json, write_string};
