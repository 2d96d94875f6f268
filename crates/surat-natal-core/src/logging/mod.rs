//! Structured logging to console and a daily JSONL file.
//!
//! ```text
//! <logs_dir>/
//! └── raw/
//!     └── 2026-10-18_card.jsonl     # one JSON object per event
//! ```
//!
//! ```ignore
//! use surat_natal_core::logging::LoggingBuilder;
//!
//! let log_path = LoggingBuilder::new("./logs", "card")
//!     .with_filter("surat_natal_core=debug")
//!     .init()?;
//! ```
//!
//! ```bash
//! # Every failed capability call
//! jq 'select(.level == "warn")' logs/raw/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::LogEntry;
pub use layer::{JsonlLayer, LoggingBuilder, DEFAULT_FILTER};
pub use writer::DailyLogFile;
