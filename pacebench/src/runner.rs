//! Suite Runner
//!
//! Orchestrates measurement passes over one or more benchmarks and prints
//! each suite's label and rendered results to standard output.
//!
//! Before the first benchmark the runner settles the environment: a
//! best-effort CPU pin (core migrations skew timings) and a fixed warm-up
//! delay, default 1 second, so scheduler and thermal churn from process
//! startup dies down outside every timed region. The delay is an
//! accommodation, not a correctness requirement — set it to zero in
//! environments without a warm-up concern.

use crate::config::HarnessConfig;
use crate::registry::SuiteRegistry;
use anyhow::Context;
use pacebench_core::{Benchmark, pin_to_cpu};
use pacebench_report::render_results;
use std::time::Duration;

/// Settle delay applied before the first suite unless overridden.
pub const DEFAULT_WARMUP: Duration = Duration::from_secs(1);

/// Runs benchmarks in sequence and reports their results.
pub struct Runner {
    warmup: Duration,
}

impl Runner {
    /// Runner with the default settle delay.
    pub fn new() -> Self {
        Self {
            warmup: DEFAULT_WARMUP,
        }
    }

    /// Runner with an explicit settle delay.
    pub fn with_warmup(warmup: Duration) -> Self {
        Self { warmup }
    }

    /// Runner configured from a discovered or loaded [`HarnessConfig`].
    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::with_warmup(config.warmup_delay())
    }

    /// The configured settle delay.
    pub fn warmup(&self) -> Duration {
        self.warmup
    }

    /// Run every registered suite, in registration order.
    pub fn run_all(&self, registry: &SuiteRegistry) -> anyhow::Result<()> {
        self.settle();
        for (id, factory) in registry.factories() {
            let mut bench =
                factory().with_context(|| format!("constructing suite `{id}` failed"))?;
            self.run_one(bench.as_mut());
        }
        Ok(())
    }

    /// Run the suites registered under `ids`, in the order given.
    ///
    /// An unknown identifier is an error: with an explicit registry a miss
    /// is a wiring mistake, and silence would hide it.
    pub fn run_ids(&self, registry: &SuiteRegistry, ids: &[&str]) -> anyhow::Result<()> {
        self.settle();
        for id in ids {
            let mut bench = registry
                .build(id)
                .with_context(|| format!("no suite registered under `{id}`"))?
                .with_context(|| format!("constructing suite `{id}` failed"))?;
            self.run_one(bench.as_mut());
        }
        Ok(())
    }

    /// Run explicitly constructed benchmark instances, in the order given.
    pub fn run_instances<'a, I>(&self, benches: I)
    where
        I: IntoIterator<Item = &'a mut dyn Benchmark>,
    {
        self.settle();
        for bench in benches {
            self.run_one(bench);
        }
    }

    /// One-time environment settling before the first measurement.
    fn settle(&self) {
        if let Err(err) = pin_to_cpu(0) {
            tracing::debug!(error = %err, "CPU pinning unavailable, continuing unpinned");
        }
        if !self.warmup.is_zero() {
            tracing::debug!(delay = ?self.warmup, "settling before first suite");
            std::thread::sleep(self.warmup);
        }
    }

    fn run_one(&self, bench: &mut dyn Benchmark) {
        let label = bench.label();
        tracing::info!(suite = %label, "running suite");
        let results = bench.execute();
        println!("{label}");
        print!("{}", render_results(&results));
        println!();
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacebench_core::{CaseResult, CaseSet, CaseSetError, Workload};

    #[test]
    fn default_warmup_is_one_second() {
        assert_eq!(Runner::new().warmup(), Duration::from_secs(1));
        assert_eq!(Runner::default().warmup(), DEFAULT_WARMUP);
    }

    #[test]
    fn warmup_can_be_reduced_to_zero() {
        assert_eq!(Runner::with_warmup(Duration::ZERO).warmup(), Duration::ZERO);
    }

    #[test]
    fn from_config_picks_up_warmup() {
        let config: HarnessConfig = toml::from_str("[runner]\nwarmup = \"0s\"").unwrap();
        assert_eq!(Runner::from_config(&config).warmup(), Duration::ZERO);
    }

    #[derive(Default)]
    struct Quick;

    impl Quick {
        fn nothing(&mut self) {}
    }

    impl Workload for Quick {
        const NAME: &'static str = "Quick";

        fn register(cases: &mut CaseSet<Self>) -> Result<(), CaseSetError> {
            cases.case("Nothing", Self::nothing)
        }
    }

    #[test]
    fn run_ids_rejects_unknown_identifier() {
        let mut registry = SuiteRegistry::new();
        registry.register::<Quick>();

        let runner = Runner::with_warmup(Duration::ZERO);
        let err = runner.run_ids(&registry, &["Missing"]).unwrap_err();
        assert!(err.to_string().contains("Missing"));
    }

    #[test]
    fn run_all_executes_every_suite() {
        let mut registry = SuiteRegistry::new();
        registry.register::<Quick>();

        let runner = Runner::with_warmup(Duration::ZERO);
        runner.run_all(&registry).unwrap();
    }

    /// A benchmark implementing the capability trait directly, without the
    /// Suite engine, to pin down what the runner requires of instances.
    struct Handmade {
        executed: u32,
    }

    impl Benchmark for Handmade {
        fn execute(&mut self) -> Vec<CaseResult> {
            self.executed += 1;
            vec![CaseResult {
                name: "only".to_string(),
                duration: Duration::from_nanos(1),
                memory_delta: 0,
            }]
        }

        fn label(&self) -> String {
            "Handmade".to_string()
        }
    }

    #[test]
    fn run_instances_visits_in_order() {
        let mut first = Handmade { executed: 0 };
        let mut second = Handmade { executed: 0 };

        let runner = Runner::with_warmup(Duration::ZERO);
        runner.run_instances([
            &mut first as &mut dyn Benchmark,
            &mut second as &mut dyn Benchmark,
        ]);

        assert_eq!(first.executed, 1);
        assert_eq!(second.executed, 1);
    }
}
