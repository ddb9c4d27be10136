//! PaceBench Example Suites
//!
//! This example demonstrates the harness and serves as a template for
//! creating your own benchmark binary.
//!
//! Run with:
//!   cargo run --release --example demo

use pacebench::prelude::*;
use pacebench::TrackingAllocator;
use std::collections::HashMap;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

// ============================================================================
// Collection workload
// ============================================================================

#[derive(Default)]
struct Collections {
    numbers: Vec<i64>,
    map: HashMap<i64, i64>,
}

impl Collections {
    fn reset_numbers(&mut self) {
        self.numbers = Vec::new();
    }

    fn vec_append(&mut self) {
        for i in 0..1000 {
            self.numbers.push(i);
        }
    }

    fn reset_map(&mut self) {
        self.map = HashMap::new();
    }

    fn map_insert(&mut self) {
        for i in 0..1000 {
            self.map.insert(i, i * 2);
        }
    }

    fn map_lookup(&mut self) {
        let mut sum = 0;
        for i in 0..1000 {
            if let Some(v) = self.map.get(&i) {
                sum += v;
            }
        }
        std::hint::black_box(sum);
    }
}

impl Workload for Collections {
    const NAME: &'static str = "Collections";

    fn register(cases: &mut CaseSet<Self>) -> Result<(), CaseSetError> {
        cases.prepare("VecAppend", Self::reset_numbers)?;
        cases.case("VecAppend", Self::vec_append)?;
        cases.prepare("MapInsert", Self::reset_map)?;
        cases.case("MapInsert", Self::map_insert)?;
        // Lookup reuses whatever MapInsert left behind; no prepare needed.
        cases.case("MapLookup", Self::map_lookup)?;
        Ok(())
    }
}

// ============================================================================
// String workload
// ============================================================================

#[derive(Default)]
struct Strings {
    assembled: String,
}

impl Strings {
    fn concat(&mut self) {
        let mut s = String::new();
        for i in 0..100 {
            s.push_str(&i.to_string());
            s.push(',');
        }
        self.assembled = s;
    }

    fn parse(&mut self) {
        let sum: i64 = self
            .assembled
            .split_terminator(',')
            .filter_map(|chunk| chunk.parse::<i64>().ok())
            .sum();
        std::hint::black_box(sum);
    }
}

impl Workload for Strings {
    const NAME: &'static str = "Strings";

    fn register(cases: &mut CaseSet<Self>) -> Result<(), CaseSetError> {
        cases.case("Concat", Self::concat)?;
        cases.case("Parse", Self::parse)?;
        Ok(())
    }

    fn prepare(&mut self) {
        // Global hook: make sure Parse has input even if run first.
        self.assembled = "12,345,6789,".repeat(16);
    }

    fn free(&mut self) {
        self.assembled.clear();
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pacebench=info".into()),
        )
        .init();

    let mut registry = SuiteRegistry::new();
    registry.register::<Collections>();
    registry.register::<Strings>();

    pacebench::run_all(&registry)
}
