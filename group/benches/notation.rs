//! Benchmarks for notation conversion.
//!
//! Compares the shared table lookup against parsing and formatting from
//! scratch, which is what the table is built from.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quotient_group::action::explicit_action;
use quotient_group::alphabet::DIGITS;
use quotient_group::notation::parse_cycles;
use quotient_group::{Notation, NotationTable};

fn bench_table(c: &mut Criterion) {
    let table = NotationTable::full();
    let cycles: Vec<&str> = table.elements(Notation::Cycle).collect();

    c.bench_function("table/cycle_to_one_line (24)", |b| {
        b.iter(|| {
            for cycle in &cycles {
                black_box(table.cycle_to_one_line(black_box(cycle)));
            }
        })
    });

    c.bench_function("parse/cycle_to_one_line (24)", |b| {
        b.iter(|| {
            for cycle in &cycles {
                if let Ok(sigma) = parse_cycles(black_box(cycle), &DIGITS) {
                    black_box(sigma.one_line(&DIGITS));
                }
            }
        })
    });

    c.bench_function("explicit_action (24)", |b| {
        b.iter(|| {
            for cycle in &cycles {
                black_box(explicit_action(black_box(cycle), &DIGITS));
            }
        })
    });
}

criterion_group!(benches, bench_table);
criterion_main!(benches);
