use crate::game::graph::Graph;
use crate::game::player::Player;
use crate::game::vertex::Vertex;
use anyhow::Context;
use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

// the size schedule of the benchmark corpus: every five tests the floor
// rises by a tier, and games under one tier keep their priorities small
const TESTS_PER_FAMILY: usize = 15;
const TIER: usize = 300;
const TESTS_PER_TIER: usize = 5;

fn span(rng: &mut SmallRng, index: usize) -> usize {
    1 + TIER * (index / TESTS_PER_TIER) + rng.random_range(0..TIER)
}

fn top_priority(rng: &mut SmallRng, n: usize) -> usize {
    match n < TIER {
        true => rng.random_range(1..=4),
        false => rng.random_range(1..=10),
    }
}

/// a uniformly random game: random owners and priorities, and for each
/// vertex between one and ten (or twenty, alternating across the family)
/// random targets, deduplicated
pub fn random_game(rng: &mut SmallRng, index: usize) -> Graph {
    let n = span(rng, index);
    let top = top_priority(rng, n);
    let mut vertices = (0..n)
        .map(|_| {
            let owner = match rng.random_range(0..2) {
                1 => Player::One,
                _ => Player::Two,
            };
            Vertex::new(owner, rng.random_range(0..top))
        })
        .collect::<Vec<Vertex>>();
    let fanout = match index % 10 < 5 {
        true => 10,
        false => 20,
    };
    for vertex in vertices.iter_mut() {
        for _ in 0..(1 + rng.random_range(0..fanout)).min(n) {
            vertex.attach(rng.random_range(0..n));
        }
    }
    Graph::new(vertices)
}

/// a bipartite symmetric game: One's vertices sit below a random split
/// point and every edge crosses it both ways, so each vertex of One is
/// wired to at least one of Two's and the whole graph is its own mirror
pub fn bipartite_game(rng: &mut SmallRng, index: usize) -> Graph {
    let n = span(rng, index).max(2);
    let top = top_priority(rng, n);
    let split = rng.random_range(0..n).max(1);
    let mut graph = Graph::new(
        (0..n)
            .map(|v| {
                let owner = match v < split {
                    true => Player::One,
                    false => Player::Two,
                };
                Vertex::new(owner, rng.random_range(0..top))
            })
            .collect(),
    );
    for v in 0..split {
        let u = split + rng.random_range(0..n - split);
        graph.attach(v, u);
        graph.attach(u, v);
    }
    let fanout = match index % 10 < 5 {
        true => 10,
        false => 30,
    };
    for v in split..n {
        for _ in 0..(1 + rng.random_range(0..fanout)).min(n) {
            let u = rng.random_range(0..split);
            graph.attach(v, u);
            graph.attach(u, v);
        }
    }
    graph
}

/// write both corpus families under the built-in game directories
pub fn write_all(seed: u64) -> anyhow::Result<()> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let families: [(&str, &str, fn(&mut SmallRng, usize) -> Graph); 2] = [
        ("games/random", "RandTest", random_game),
        ("games/bipartite", "BipSymTest", bipartite_game),
    ];
    for (directory, stem, family) in families {
        std::fs::create_dir_all(directory)
            .with_context(|| format!("create {}", directory))?;
        for index in 0..TESTS_PER_FAMILY {
            let game = family(&mut rng, index);
            let path = format!("{}/{}_{:02}.gm", directory, stem, index);
            std::fs::write(&path, game.to_string()).with_context(|| format!("write {}", path))?;
            log::info!("{:<12} {:>6} vertices {:>8} edges", path, game.n(), game.edges());
        }
    }
    Ok(())
}
