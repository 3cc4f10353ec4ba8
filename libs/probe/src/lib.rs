//! One-shot MongoDB connectivity probe
//!
//! Runs a strict sequence of sanity checks against a MongoDB endpoint:
//! connect, ping, list databases, insert a throwaway document into a scratch
//! namespace, read it back, drop the scratch namespace, and close the
//! connection. The connection is closed on every exit path, and the close
//! outcome is always the last entry in the report.
//!
//! There is no retry and no partial-success policy: the first error aborts
//! the remaining steps (close excepted) and the report carries the failing
//! step with the underlying error message.
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::MongoConfig;
//! use probe::{ProbeOptions, run};
//!
//! let config = MongoConfig::new("mongodb://localhost:27017");
//! let report = run(&config, &ProbeOptions::default()).await;
//!
//! for line in report.lines() {
//!     println!("{line}");
//! }
//! std::process::exit(if report.succeeded() { 0 } else { 1 });
//! ```

mod document;
mod report;
mod runner;

pub use document::{PROBE_MARKER, ProbeDocument};
pub use report::{ProbeReport, ProbeStep, StepOutcome};
pub use runner::{ProbeError, ProbeOptions, run};
