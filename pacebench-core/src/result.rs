//! Result Record

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of one measured case: name, elapsed time for the whole
/// iteration batch, and the change in live heap bytes across it.
///
/// `memory_delta` is signed — a case that releases more than it allocates
/// reports a negative delta. The duration covers all iterations of the
/// batch; divide by the suite's iteration count for a per-iteration figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseResult {
    /// Declared case name.
    pub name: String,
    /// Wall-clock time for the full iteration batch.
    pub duration: Duration,
    /// Live-heap change in bytes across the batch (may be negative).
    pub memory_delta: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_delta_representable() {
        let result = CaseResult {
            name: "shrink".to_string(),
            duration: Duration::from_micros(12),
            memory_delta: -4096,
        };
        assert!(result.memory_delta < 0);
    }
}
