//! Benchmarks for the Hamiltonian path search.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hampath::graph::hamiltonian;
use hampath::Graph;

/// Undirected cycle 1-2-...-n-1. Always has a Hamiltonian path.
fn cycle_graph(n: usize) -> Graph {
    let mut g = Graph::new(n, false);
    for v in 1..n {
        g.add_edge(v, v + 1).unwrap();
    }
    g.add_edge(n, 1).unwrap();
    g
}

/// Two complete halves joined by a single bridge edge. The bridge forces
/// heavy backtracking before the search settles on crossing it last.
fn barbell_graph(half: usize) -> Graph {
    let n = 2 * half;
    let mut g = Graph::new(n, false);
    for u in 1..=half {
        for v in (u + 1)..=half {
            g.add_edge(u, v).unwrap();
            g.add_edge(u + half, v + half).unwrap();
        }
    }
    g.add_edge(half, half + 1).unwrap();
    g
}

fn bench_find_path(c: &mut Criterion) {
    let cycle = cycle_graph(20);
    c.bench_function("find_path_cycle_20", |b| {
        b.iter(|| hamiltonian::find_path(black_box(&cycle)))
    });

    let barbell = barbell_graph(8);
    c.bench_function("find_path_barbell_16", |b| {
        b.iter(|| hamiltonian::find_path(black_box(&barbell)))
    });

    let no_path = Graph::new(12, false);
    c.bench_function("find_path_isolated_12", |b| {
        b.iter(|| hamiltonian::find_path(black_box(&no_path)))
    });
}

criterion_group!(benches, bench_find_path);
criterion_main!(benches);
