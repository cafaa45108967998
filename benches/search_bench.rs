use criterion::{criterion_group, criterion_main, Criterion, black_box};
use xobot::rules::initial_state;
use xobot::search::alphabeta::{SearchParams, Searcher};

fn bench_search(c: &mut Criterion) {
    let b = initial_state();
    c.bench_function("alphabeta_startpos", |ben| {
        ben.iter(|| {
            let mut s = Searcher::default();
            let r = s.search(black_box(&b));
            black_box(r.nodes)
        })
    });
    c.bench_function("alphabeta_startpos_threads_4", |ben| {
        ben.iter(|| {
            let mut s = Searcher::with_params(SearchParams { prune: true, threads: 4 });
            let r = s.search(black_box(&b));
            black_box(r.nodes)
        })
    });
    c.bench_function("minimax_startpos", |ben| {
        ben.iter(|| {
            let mut s = Searcher::with_params(SearchParams { prune: false, threads: 1 });
            let r = s.search(black_box(&b));
            black_box(r.nodes)
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
