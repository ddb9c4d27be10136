#![warn(missing_docs)]
//! PaceBench Report - Result Rendering
//!
//! Formats [`CaseResult`] records as aligned, terminal-friendly text: case
//! name left-aligned, human-readable duration right-aligned, one line per
//! record. Purely functional — no state, no I/O; the runner decides where
//! the text goes.

use pacebench_core::CaseResult;
use std::fmt::Write;
use std::time::Duration;

/// Width of the left-aligned case-name column.
pub const NAME_WIDTH: usize = 20;

/// Width of the right-aligned duration column.
pub const DURATION_WIDTH: usize = 16;

/// Format a duration with an auto-scaled unit (ns, µs, ms, s).
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    if nanos >= 1_000_000_000 {
        format!("{:.2} s", nanos as f64 / 1e9)
    } else if nanos >= 1_000_000 {
        format!("{:.2} ms", nanos as f64 / 1e6)
    } else if nanos >= 1_000 {
        format!("{:.2} µs", nanos as f64 / 1e3)
    } else {
        format!("{} ns", nanos)
    }
}

/// Render result records as one aligned line each.
///
/// Names longer than [`NAME_WIDTH`] widen their own line rather than being
/// truncated; a mangled name would be worse than a ragged column.
pub fn render_results(results: &[CaseResult]) -> String {
    let mut out = String::new();
    for result in results {
        let _ = writeln!(
            out,
            "{:<name_w$} {:>dur_w$}",
            result.name,
            format_duration(result.duration),
            name_w = NAME_WIDTH,
            dur_w = DURATION_WIDTH,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, duration: Duration) -> CaseResult {
        CaseResult {
            name: name.to_string(),
            duration,
            memory_delta: 0,
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(Duration::from_nanos(450)), "450 ns");
        assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.50 µs");
        assert_eq!(format_duration(Duration::from_micros(2_340)), "2.34 ms");
        assert_eq!(format_duration(Duration::from_millis(1_250)), "1.25 s");
    }

    #[test]
    fn test_render_aligns_columns() {
        let results = vec![
            record("Append", Duration::from_micros(123)),
            record("Lookup", Duration::from_nanos(980)),
        ];
        let rendered = render_results(&results);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Append "));
        assert!(lines[0].ends_with("123.00 µs"));
        assert!(lines[1].ends_with("980 ns"));
        // Both lines share the fixed layout width.
        assert_eq!(
            lines[0].chars().count(),
            NAME_WIDTH + 1 + DURATION_WIDTH,
        );
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn test_render_empty_is_empty() {
        assert_eq!(render_results(&[]), "");
    }

    #[test]
    fn test_long_names_widen_instead_of_truncating() {
        let results = vec![record(
            "a_case_name_well_past_twenty_columns",
            Duration::from_nanos(1),
        )];
        let rendered = render_results(&results);
        assert!(rendered.contains("a_case_name_well_past_twenty_columns"));
    }
}
