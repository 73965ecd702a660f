//! Performance measurement for a complete layout generation run

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use roomwave::algorithm::events::NullSink;
use roomwave::algorithm::process::{ContradictionPolicy, GenerationProcess, ProcessState};
use roomwave::spatial::tiles::{TileCatalog, demo_rooms};
use std::hint::black_box;

/// Measures a full observe/collapse/propagate run on a 16x12 grid
fn bench_generate_16x12(c: &mut Criterion) {
    c.bench_function("generate_16x12", |b| {
        b.iter(|| {
            let Ok(catalog) = TileCatalog::build(demo_rooms(), true) else {
                return;
            };
            let Ok(mut process) =
                GenerationProcess::new(catalog, 16, 12, ContradictionPolicy::Placeholder, 12345)
            else {
                return;
            };

            let mut sink = NullSink;
            process.reset(&mut sink);
            for _ in 0..16 * 12 + 1 {
                if process.state() == ProcessState::Finished {
                    break;
                }
                process.advance(&mut sink);
            }
            black_box(process.state());
        });
    });
}

criterion_group!(benches, bench_generate_16x12);
criterion_main!(benches);
