//! Case Registration
//!
//! Explicit, statically-checked registration of measured cases and their
//! paired prepares. A workload registers `(name, routine)` pairs once, in
//! [`crate::Suite::new`]; the resulting set is immutable afterwards.
//!
//! The `fn(&mut W)` routine type is the whole declaration surface: a
//! routine with parameters or a return value does not typecheck, so there
//! is nothing to skip at runtime.

use fxhash::FxHashMap;
use std::collections::hash_map::Entry;
use thiserror::Error;

/// A zero-argument, no-result routine bound to the workload's state.
pub type Routine<W> = fn(&mut W);

/// One measured unit: a declared name and its routine.
pub(crate) struct Case<W> {
    pub(crate) name: &'static str,
    pub(crate) run: Routine<W>,
}

/// Registration error raised while a suite is being constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaseSetError {
    /// A case or prepare was declared with an empty name.
    #[error("case name must not be empty")]
    EmptyName,
    /// Two prepares were registered under the same name.
    #[error("duplicate prepare registration for case `{0}`")]
    DuplicatePrepare(&'static str),
}

/// The case/prepare registry of one suite.
///
/// Cases keep registration order; two `execute` passes over the same suite
/// visit them identically. Prepares are keyed by name, at most one per
/// name. Duplicate *case* names are accepted mechanically — identity is
/// the name, and disambiguation is the author's concern.
pub struct CaseSet<W> {
    cases: Vec<Case<W>>,
    prepares: FxHashMap<&'static str, Routine<W>>,
}

impl<W> CaseSet<W> {
    pub(crate) fn new() -> Self {
        Self {
            cases: Vec::new(),
            prepares: FxHashMap::default(),
        }
    }

    /// Register a measured case under `name`.
    pub fn case(&mut self, name: &'static str, run: Routine<W>) -> Result<(), CaseSetError> {
        if name.is_empty() {
            return Err(CaseSetError::EmptyName);
        }
        self.cases.push(Case { name, run });
        Ok(())
    }

    /// Register the setup routine paired with the case of the same `name`.
    ///
    /// The prepare runs immediately before its case, outside the timed and
    /// measured region. Registering a second prepare under a name already
    /// taken is an error.
    pub fn prepare(&mut self, name: &'static str, run: Routine<W>) -> Result<(), CaseSetError> {
        if name.is_empty() {
            return Err(CaseSetError::EmptyName);
        }
        match self.prepares.entry(name) {
            Entry::Occupied(_) => Err(CaseSetError::DuplicatePrepare(name)),
            Entry::Vacant(slot) => {
                slot.insert(run);
                Ok(())
            }
        }
    }

    /// Number of registered cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether no cases have been registered.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Declared case names, in registration order.
    pub fn case_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cases.iter().map(|c| c.name)
    }

    pub(crate) fn cases(&self) -> &[Case<W>] {
        &self.cases
    }

    pub(crate) fn prepare_for(&self, name: &str) -> Option<Routine<W>> {
        self.prepares.get(name).copied()
    }
}
