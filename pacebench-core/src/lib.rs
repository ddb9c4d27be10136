#![warn(missing_docs)]
//! PaceBench Core - Suite Execution Runtime
//!
//! This crate provides the execution environment for benchmark suites:
//! - `Suite` struct driving fixed-iteration measurement of registered cases
//! - Explicit case/prepare registration via `CaseSet` (no runtime reflection)
//! - Live-heap accounting through the `TrackingAllocator` interceptor
//! - Wall-clock timing with `Instant`-based bracketing
//!
//! A benchmark author implements [`Workload`] for a plain struct whose fields
//! hold the mutable state the cases operate on, registers named cases (and
//! optional same-named prepares) in [`Workload::register`], and hands an
//! instance to [`Suite::new`]. Each [`Suite::execute`] pass produces one
//! [`CaseResult`] per case, in registration order.

mod allocator;
mod caseset;
mod measure;
mod result;
mod suite;

pub use allocator::{TrackingAllocator, live_bytes};
pub use caseset::{CaseSet, CaseSetError, Routine};
pub use measure::{Timer, pin_to_cpu};
pub use result::CaseResult;
pub use suite::{Benchmark, DEFAULT_ITERATIONS, Suite, Workload};
