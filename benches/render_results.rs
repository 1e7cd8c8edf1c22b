use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use launchfinder::{
    core::state::ui::UiState,
    domain::launch::SearchOutcome,
    presentation::{components::page::page_lines, view::render_results_list},
    test_helpers::sample_summary,
};

fn outcome(count: usize) -> SearchOutcome {
    SearchOutcome::Found(
        (0..count)
            .map(|i| sample_summary(&i.to_string(), &format!("Falcon 9 Block 5 | Starlink {i}")))
            .collect(),
    )
}

fn benchmark(c: &mut Criterion) {
    let launches = outcome(100);
    let ui = UiState::default();

    c.bench_function("render_results_list", |b| {
        b.iter(|| render_results_list(black_box(&launches), black_box("falcon")))
    });

    let list = render_results_list(&launches, "falcon");
    c.bench_function("page_lines", |b| {
        b.iter(|| page_lines(black_box(&list), black_box(&ui)))
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
