//! Suite Registry
//!
//! An explicit mapping from a chosen identifier to a zero-argument factory
//! producing a runnable benchmark. Authors populate it at startup; the
//! runner's "run everything" mode walks it in registration order. Nothing
//! is discovered automatically — if a suite is not registered here, the
//! harness does not know it exists.

use pacebench_core::{Benchmark, CaseSetError, Suite, Workload};

/// Zero-argument factory producing a fresh benchmark instance.
///
/// Construction is fallible because building a suite runs the workload's
/// registration, which can reject misdeclared cases.
pub type SuiteFactory = Box<dyn Fn() -> Result<Box<dyn Benchmark>, CaseSetError> + Send + Sync>;

/// Identifier → factory registry of every runnable suite.
pub struct SuiteRegistry {
    entries: Vec<(String, SuiteFactory)>,
}

impl SuiteRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a default-constructible workload under its own
    /// [`Workload::NAME`].
    pub fn register<W>(&mut self)
    where
        W: Workload + Default + 'static,
    {
        self.register_factory(W::NAME, || {
            Suite::new(W::default()).map(|suite| Box::new(suite) as Box<dyn Benchmark>)
        });
    }

    /// Register an arbitrary factory under `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is already registered; two suites hiding behind one
    /// identifier is a startup wiring mistake, not a runtime condition.
    pub fn register_factory<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<Box<dyn Benchmark>, CaseSetError> + Send + Sync + 'static,
    {
        let id = id.into();
        assert!(
            !self.entries.iter().any(|(existing, _)| *existing == id),
            "suite `{id}` is already registered"
        );
        self.entries.push((id, Box::new(factory)));
    }

    /// Registered identifiers, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// Number of registered suites.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a fresh instance of the suite registered under `id`.
    pub fn build(&self, id: &str) -> Option<Result<Box<dyn Benchmark>, CaseSetError>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, factory)| factory())
    }

    pub(crate) fn factories(&self) -> impl Iterator<Item = (&str, &SuiteFactory)> {
        self.entries.iter().map(|(id, f)| (id.as_str(), f))
    }
}

impl Default for SuiteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
