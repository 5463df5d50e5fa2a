//! # Tubestat - London Underground Status in the Terminal
//!
//! A one-shot CLI that fetches the TfL line-status feed and prints a
//! color-coded, column-aligned report for the 11 Underground lines.
//!
//! The pipeline is a straight line:
//!
//! ```text
//! ┌──────────┐   JSON    ┌───────────┐  LineStatus  ┌───────────┐
//! │  client  │──────────▶│  status   │─────────────▶│  report   │
//! │  (fetch) │           │ (extract) │              │ (format)  │
//! └──────────┘           └───────────┘              └───────────┘
//! ```
//!
//! One fetch, one pass over the static line table, one line of output per
//! tube line (plus a reason line when a line is disrupted).

pub mod client;
pub mod cmd_args;
pub mod config;
pub mod lines;
pub mod report;
pub mod status;
pub mod style;

pub use client::StatusClient;
pub use lines::{Line, LONDON_TUBE};
pub use report::{justify, render_report};
pub use status::LineStatus;
