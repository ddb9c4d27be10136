//! Suite - The Measurement Engine
//!
//! Pairs a workload instance with its registered cases and drives the
//! per-case measurement sequence: paired prepare, heap baseline, timed
//! fixed-count iteration loop, heap after-snapshot, result record.

use crate::allocator::live_bytes;
use crate::caseset::{CaseSet, CaseSetError};
use crate::measure::Timer;
use crate::result::CaseResult;

/// Default number of iterations per case per measurement pass.
pub const DEFAULT_ITERATIONS: u32 = 10;

/// A benchmark workload: state plus registered measurement routines.
///
/// Implementors register named cases (and optional same-named prepares) in
/// [`Workload::register`]; the suite calls it exactly once, at
/// construction. The two lifecycle hooks default to no-ops.
pub trait Workload {
    /// Display name used in report headers.
    const NAME: &'static str;

    /// Register this workload's cases and prepares.
    fn register(cases: &mut CaseSet<Self>) -> Result<(), CaseSetError>
    where
        Self: Sized;

    /// Global setup hook, invoked once before any case runs.
    fn prepare(&mut self) {}

    /// Global teardown hook, invoked once after all cases have run.
    fn free(&mut self) {}
}

/// The capability a runnable benchmark exposes to the runner: a
/// measurement pass producing ordered records, and a display identity.
pub trait Benchmark {
    /// Run one full measurement pass.
    fn execute(&mut self) -> Vec<CaseResult>;

    /// Human-readable identity for report headers.
    fn label(&self) -> String;
}

/// One workload bound to its immutable case registry.
///
/// Construction runs registration once; `execute` may then be called any
/// number of times, each pass producing a fresh result vector. No harness
/// state persists across passes — whatever the workload's own fields
/// retain is deliberately left to the author.
pub struct Suite<W: Workload> {
    workload: W,
    cases: CaseSet<W>,
    iterations: u32,
}

impl<W: Workload> Suite<W> {
    /// Build the suite, running the workload's registration.
    pub fn new(workload: W) -> Result<Self, CaseSetError> {
        let mut cases = CaseSet::new();
        W::register(&mut cases)?;
        Ok(Self {
            workload,
            cases,
            iterations: DEFAULT_ITERATIONS,
        })
    }

    /// Set how many times each case body runs per measurement pass.
    ///
    /// Expected to be positive; defaults to [`DEFAULT_ITERATIONS`]. The
    /// count applies suite-wide — cases needing different counts belong in
    /// separate workloads.
    pub fn set_iterations(&mut self, iterations: u32) {
        self.iterations = iterations;
    }

    /// Current per-case iteration count.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// The wrapped workload, for pre-`execute` adjustments.
    pub fn workload_mut(&mut self) -> &mut W {
        &mut self.workload
    }

    /// Run one measurement pass over all cases, in registration order.
    ///
    /// A panic in any case, prepare, or hook propagates immediately,
    /// aborting the remaining cases of this pass — a broken case
    /// invalidates relative comparisons for the whole run, so there is no
    /// partial-result salvage.
    pub fn execute(&mut self) -> Vec<CaseResult> {
        self.workload.prepare();

        let iterations = self.iterations;
        // Pre-sized, and pushed to outside the [baseline, after] window, so
        // the harness's own bookkeeping never lands in a case's delta.
        let mut results = Vec::with_capacity(self.cases.len());

        for case in self.cases.cases() {
            if let Some(prepare) = self.cases.prepare_for(case.name) {
                prepare(&mut self.workload);
            }

            let baseline = live_bytes();
            let timer = Timer::start();
            for _ in 0..iterations {
                (case.run)(&mut self.workload);
            }
            let duration = timer.stop();
            // No release is forced between stop and read: allocations the
            // iterations retained are still live and still counted.
            let after = live_bytes();

            results.push(CaseResult {
                name: case.name.to_string(),
                duration,
                memory_delta: after - baseline,
            });
        }

        self.workload.free();
        results
    }
}

impl<W: Workload> Benchmark for Suite<W> {
    fn execute(&mut self) -> Vec<CaseResult> {
        Suite::execute(self)
    }

    fn label(&self) -> String {
        format!("{} ({})", W::NAME, self.iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        ran: Vec<&'static str>,
        hook_order: Vec<&'static str>,
    }

    impl Counting {
        fn first(&mut self) {
            self.ran.push("first");
        }

        fn second(&mut self) {
            self.ran.push("second");
        }

        fn warm_second(&mut self) {
            self.ran.push("warm_second");
        }
    }

    impl Workload for Counting {
        const NAME: &'static str = "Counting";

        fn register(cases: &mut CaseSet<Self>) -> Result<(), CaseSetError> {
            cases.case("First", Self::first)?;
            cases.case("Second", Self::second)?;
            cases.prepare("Second", Self::warm_second)?;
            Ok(())
        }

        fn prepare(&mut self) {
            self.hook_order.push("prepare");
        }

        fn free(&mut self) {
            self.hook_order.push("free");
        }
    }

    #[test]
    fn results_match_registration_order() {
        let mut suite = Suite::new(Counting::default()).unwrap();
        suite.set_iterations(3);
        let results = suite.execute();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "First");
        assert_eq!(results[1].name, "Second");
    }

    #[test]
    fn iteration_count_and_prepare_sequencing() {
        let mut suite = Suite::new(Counting::default()).unwrap();
        suite.set_iterations(2);
        suite.execute();

        // "First" has no prepare; "Second" is warmed exactly once, before
        // its first iteration and after all of "First".
        assert_eq!(
            suite.workload_mut().ran,
            vec!["first", "first", "warm_second", "second", "second"]
        );
    }

    #[test]
    fn hooks_bracket_the_pass() {
        let mut suite = Suite::new(Counting::default()).unwrap();
        suite.set_iterations(1);
        suite.execute();
        suite.execute();

        assert_eq!(
            suite.workload_mut().hook_order,
            vec!["prepare", "free", "prepare", "free"]
        );
    }

    #[test]
    fn zero_iterations_still_brackets_each_case() {
        let mut suite = Suite::new(Counting::default()).unwrap();
        suite.set_iterations(0);
        let results = suite.execute();

        assert_eq!(results.len(), 2);
        // The paired prepare still runs; the case bodies never do.
        assert_eq!(suite.workload_mut().ran, vec!["warm_second"]);
        for result in &results {
            assert!(result.duration < std::time::Duration::from_millis(1));
        }
    }

    #[test]
    fn each_pass_returns_fresh_results() {
        let mut suite = Suite::new(Counting::default()).unwrap();
        suite.set_iterations(1);
        let a = suite.execute();
        let b = suite.execute();
        assert_eq!(a.len(), b.len());
    }

    #[test]
    fn label_includes_iteration_count() {
        let mut suite = Suite::new(Counting::default()).unwrap();
        assert_eq!(suite.iterations(), DEFAULT_ITERATIONS);
        assert_eq!(suite.label(), "Counting (10)");
        suite.set_iterations(50);
        assert_eq!(suite.iterations(), 50);
        assert_eq!(suite.label(), "Counting (50)");
    }

    struct Panicking {
        calls: u32,
    }

    impl Panicking {
        fn blows_up(&mut self) {
            self.calls += 1;
            if self.calls == 3 {
                panic!("third iteration fails");
            }
        }
    }

    impl Workload for Panicking {
        const NAME: &'static str = "Panicking";

        fn register(cases: &mut CaseSet<Self>) -> Result<(), CaseSetError> {
            cases.case("BlowsUp", Self::blows_up)
        }
    }

    #[test]
    fn panic_mid_iteration_propagates_without_results() {
        let mut suite = Suite::new(Panicking { calls: 0 }).unwrap();
        suite.set_iterations(10);

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| suite.execute()));
        assert!(outcome.is_err());
        // Failed on the 3rd of 10 iterations; nothing was returned.
        assert_eq!(suite.workload_mut().calls, 3);
    }

    struct BadRegistration;

    impl Workload for BadRegistration {
        const NAME: &'static str = "Bad";

        fn register(cases: &mut CaseSet<Self>) -> Result<(), CaseSetError> {
            cases.prepare("X", |_| {})?;
            cases.prepare("X", |_| {})?;
            Ok(())
        }
    }

    #[test]
    fn registration_errors_fail_construction() {
        let err = Suite::new(BadRegistration).err().unwrap();
        assert_eq!(err, CaseSetError::DuplicatePrepare("X"));
    }
}
