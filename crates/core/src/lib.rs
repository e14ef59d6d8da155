// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trend-core: issue trend and status analysis.
//!
//! Turns raw issue records into bucketed count tables and summary
//! statistics. All timestamps are converted to one timezone-free UTC
//! frame on ingestion; records whose creation date cannot be parsed are
//! dropped silently. An analysis with nothing to show returns
//! [`Outcome::Empty`] rather than an empty table.
//!
//! ```rust,ignore
//! use trend_core::{analyze_trend, source, Outcome, Params};
//!
//! let records = source::load(Path::new("issues.json"))?;
//! match analyze_trend(&records, &Params::default().with_year(Some(2023))) {
//!     Outcome::Populated(report) => println!("{} issues", report.summary.total),
//!     Outcome::Empty(reason) => println!("{reason}"),
//! }
//! ```

pub mod aggregate;
pub mod analysis;
pub mod error;
pub mod filter;
pub mod issue;
pub mod jsonl;
pub mod outcome;
pub mod record;
pub mod source;
pub mod status;
pub mod summary;
pub mod timestamp;

pub use aggregate::{Bucket, TrendMode};
pub use analysis::{analyze_status, analyze_trend, Params, StatusReport, TrendReport};
pub use error::{Error, Result};
pub use filter::DateRange;
pub use issue::Issue;
pub use outcome::{EmptyReason, Outcome};
pub use record::{EventRecord, IssueRecord};
pub use status::Status;
pub use summary::{DateSpan, StatusShare, StatusSummary, TrendSummary};
