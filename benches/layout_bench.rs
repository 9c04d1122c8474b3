//! Benchmarks for per-render layout and route resolution.
//!
//! Run with: cargo bench --bench layout_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use zentube_shell::models::{RouteClass, SessionState};
use zentube_shell::services::{LayoutEngine, RouteTable, evaluate};

const PATHS: [&str; 6] = [
    "/",
    "/watch/abc123",
    "/shorts",
    "/auth",
    "/watch-later",
    "/search?q=rust",
];

fn bench_layout_resolve(c: &mut Criterion) {
    let engine = LayoutEngine::default();
    let mut group = c.benchmark_group("layout_resolve");

    for width in [400u32, 1280] {
        group.bench_with_input(BenchmarkId::new("all_paths", width), &width, |b, &width| {
            b.iter(|| {
                for path in PATHS {
                    black_box(engine.resolve(black_box(path), width, true));
                }
            });
        });
    }

    group.finish();
}

fn bench_route_resolve(c: &mut Criterion) {
    let routes = RouteTable::default_table();
    let session = SessionState::anonymous();

    c.bench_function("route_resolve_and_guard", |b| {
        b.iter(|| {
            for path in PATHS.iter().chain(["/admin", "/edit/42", "/nowhere"].iter()) {
                let route = routes.resolve(black_box(path));
                black_box(evaluate(&session, route.class));
            }
        });
    });

    c.bench_function("guard_only", |b| {
        b.iter(|| {
            for class in RouteClass::ALL {
                black_box(evaluate(black_box(&session), class));
            }
        });
    });
}

criterion_group!(benches, bench_layout_resolve, bench_route_resolve);
criterion_main!(benches);
