#![warn(missing_docs)]
//! # PaceBench
//!
//! Fixed-iteration micro-benchmarking harness with per-case setup and
//! heap-delta reporting.
//!
//! PaceBench measures named routines ("cases") declared on a plain struct
//! (the "workload"):
//! - **Explicit Registration**: cases and their paired setup routines are
//!   registered by name at construction time — no runtime reflection, no
//!   link-time magic
//! - **Fixed-Count Measurement**: each case body runs a configurable number
//!   of back-to-back iterations (default 10) inside one timed window
//! - **Heap Deltas**: `TrackingAllocator` accounts live bytes, so every
//!   result carries the signed memory change its iterations caused
//! - **Aligned Text Reports**: two-column output on stdout, one suite after
//!   another
//!
//! ## Quick Start
//!
//! ```ignore
//! use pacebench::prelude::*;
//!
//! #[global_allocator]
//! static ALLOC: pacebench::TrackingAllocator = pacebench::TrackingAllocator;
//!
//! #[derive(Default)]
//! struct Numbers {
//!     scratch: Vec<u64>,
//! }
//!
//! impl Numbers {
//!     fn reset(&mut self) {
//!         self.scratch.clear();
//!     }
//!
//!     fn append(&mut self) {
//!         for i in 0..100 {
//!             self.scratch.push(i);
//!         }
//!     }
//! }
//!
//! impl Workload for Numbers {
//!     const NAME: &'static str = "Numbers";
//!
//!     fn register(cases: &mut CaseSet<Self>) -> Result<(), CaseSetError> {
//!         cases.prepare("Append", Self::reset)?;
//!         cases.case("Append", Self::append)
//!     }
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut registry = SuiteRegistry::new();
//!     registry.register::<Numbers>();
//!     pacebench::run_all(&registry)
//! }
//! ```

mod config;
mod registry;
mod runner;

// Re-export the runtime surface
pub use pacebench_core::{
    Benchmark, CaseResult, CaseSet, CaseSetError, DEFAULT_ITERATIONS, Routine, Suite,
    TrackingAllocator, Workload, live_bytes,
};

// Re-export report rendering
pub use pacebench_report::{DURATION_WIDTH, NAME_WIDTH, format_duration, render_results};

pub use config::{HarnessConfig, RunnerConfig, parse_duration};
pub use registry::{SuiteFactory, SuiteRegistry};
pub use runner::{DEFAULT_WARMUP, Runner};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Benchmark, CaseResult, CaseSet, CaseSetError, Runner, Suite, SuiteRegistry, Workload,
    };
}

/// Run every registered suite with a runner configured from a discovered
/// `pace.toml` (or defaults when none exists).
///
/// Call this from your benchmark binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     pacebench::run_all(&registry)
/// }
/// ```
pub fn run_all(registry: &SuiteRegistry) -> anyhow::Result<()> {
    let config = HarnessConfig::discover().unwrap_or_default();
    Runner::from_config(&config).run_all(registry)
}
