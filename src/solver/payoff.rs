use super::subgraph::Subgraph;
use crate::game::graph::Graph;
use crate::game::player::Player;
use crate::Weight;

/// weights of the equivalent mean-payoff game: every edge leaving v pays
/// (-n)^priority(v), so higher priorities dominate any number of lower
/// ones and the sign tracks parity
pub fn weights(graph: &Graph) -> Vec<Weight> {
    let n = graph.n() as Weight;
    (0..graph.n())
        .map(|v| (-n).pow(graph.priority(v) as u32))
        .collect()
}

/// value iteration over one strongly connected subgraph. nu starts at
/// zero; each round One minimizes and Two maximizes over successors and
/// adds the vertex weight. a value escaping ±2nN settles that vertex for
/// the player it escapes toward, and settled winners stick. the round
/// bound 4n²N + 1 is enough for every value to escape, so the sweep also
/// stops as soon as no vertex is left open.
pub fn solve(sub: &Subgraph, mu: &[Weight]) -> Vec<Player> {
    let xn = sub.len();
    if xn == 1 {
        return vec![super::lone(sub)];
    }
    let n = sub.ambient().n() as Weight;
    let top = (0..xn)
        .map(|x| mu[sub.global(x)].abs())
        .max()
        .expect("nonempty component");
    let escape = 2 * n * top;
    let rounds = 4 * n * n * top + 1;
    let mut nu: Vec<Weight> = vec![0; xn];
    let mut winners: Vec<Option<Player>> = vec![None; xn];
    let mut round = 0;
    while round < rounds && winners.iter().any(Option::is_none) {
        round += 1;
        nu = (0..xn)
            .map(|x| {
                let values = sub.successors(x).iter().map(|&y| nu[y]);
                let best = match sub.owner(x) {
                    Player::One => values.min(),
                    Player::Two => values.max(),
                };
                mu[sub.global(x)] + best.expect("strongly connected component")
            })
            .collect();
        for x in 0..xn {
            if winners[x].is_none() {
                if nu[x] > escape {
                    winners[x] = Some(Player::Two);
                }
                if nu[x] < -escape {
                    winners[x] = Some(Player::One);
                }
            }
        }
    }
    winners
        .into_iter()
        .map(|winner| winner.expect("value iteration escapes within its bound"))
        .collect()
}
