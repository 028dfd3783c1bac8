use pgsolve::game::graph::Graph;
use pgsolve::game::player::Player;
use pgsolve::game::vertex::Vertex;
use pgsolve::solver;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        solving_by_reduction,
        solving_by_pruning,
        solving_by_improvement,
        pruning_obsolete_edges,
        decomposing_components,
}

/// a fixed arena small enough for the reduction's round bound
fn arena() -> Graph {
    let ref mut rng = SmallRng::seed_from_u64(0xbe7c);
    let n = 24;
    let mut vertices = (0..n)
        .map(|_| {
            let owner = match rng.random_range(0..2) {
                1 => Player::One,
                _ => Player::Two,
            };
            Vertex::new(owner, rng.random_range(0..3))
        })
        .collect::<Vec<Vertex>>();
    for vertex in vertices.iter_mut() {
        for _ in 0..1 + rng.random_range(0..4) {
            vertex.attach(rng.random_range(0..n));
        }
    }
    Graph::new(vertices)
}

fn solving_by_reduction(c: &mut criterion::Criterion) {
    let game = arena();
    c.bench_function("solve by mean-payoff reduction", |b| {
        b.iter(|| solver::solve_a(game.clone()))
    });
}

fn solving_by_pruning(c: &mut criterion::Criterion) {
    let game = arena();
    c.bench_function("solve by pruning and strategy improvement", |b| {
        b.iter(|| solver::solve_b(game.clone()))
    });
}

fn solving_by_improvement(c: &mut criterion::Criterion) {
    let game = arena();
    c.bench_function("solve by whole-game strategy improvement", |b| {
        b.iter(|| solver::solve_c(game.clone()))
    });
}

fn pruning_obsolete_edges(c: &mut criterion::Criterion) {
    let game = arena();
    c.bench_function("prune obsolete edges to fixpoint", |b| {
        b.iter(|| {
            let mut copy = game.clone();
            solver::obsolete::prune(&mut copy, &solver::obsolete::Parity)
        })
    });
}

fn decomposing_components(c: &mut criterion::Criterion) {
    let game = arena();
    let subset = (0..game.n()).collect::<Vec<usize>>();
    c.bench_function("decompose into strongly connected components", |b| {
        b.iter(|| solver::scc::components(&subset, &game))
    });
}
