pub mod improve;
pub mod obsolete;
pub mod payoff;
pub mod reach;
pub mod scc;
pub mod subgraph;
pub mod valuation;
pub mod winner;

use crate::game::graph::Graph;
use crate::game::player::Player;
use self::subgraph::Subgraph;
use self::winner::Winners;

/// solve by reduction to a mean-payoff game: cut the edges the payoff
/// lookahead condemns, then value-iterate the components
pub fn solve_a(mut game: Graph) -> Vec<Player> {
    let mu = payoff::weights(&game);
    obsolete::prune(&mut game, &obsolete::MeanPayoff { mu: mu.clone() });
    decompose(&game, |sub| payoff::solve(sub, &mu))
}

/// solve by parity-native pruning followed by strategy improvement on
/// each component
pub fn solve_b(mut game: Graph) -> Vec<Player> {
    obsolete::prune(&mut game, &obsolete::Parity);
    decompose(&game, improve::solve)
}

/// solve by strategy improvement over the whole game at once
pub fn solve_c(game: Graph) -> Vec<Player> {
    let everything = (0..game.n()).collect::<Vec<usize>>();
    improve::solve(&Subgraph::induce(&game, &everything))
}

/// the decomposition skeleton shared by the pruning solvers: keep a
/// stack of pending subsets, initially everything. each round, pop one,
/// drop whatever the attractor already decided, split the rest into
/// components with sinks on top, solve just the top component, then let
/// both attractors spread the new winners before the next round. a
/// subset is re-split every time it surfaces, since the attractor may
/// have carved pieces out of it.
fn decompose<'g>(graph: &'g Graph, solve: impl Fn(&Subgraph<'g>) -> Vec<Player>) -> Vec<Player> {
    let mut winners = Winners::unknown(graph.n());
    let mut stack: Vec<Vec<usize>> = vec![(0..graph.n()).collect()];
    while let Some(subset) = stack.pop() {
        let open = subset
            .into_iter()
            .filter(|&v| !winners.decided(v))
            .collect::<Vec<usize>>();
        if open.is_empty() {
            continue;
        }
        stack.extend(scc::components(&open, graph));
        let component = stack.pop().expect("a nonempty subset has components");
        let sub = Subgraph::induce(graph, &component);
        for (x, side) in solve(&sub).into_iter().enumerate() {
            winners.set(sub.global(x), side);
        }
        reach::reach(&mut winners, Player::One, graph);
        reach::reach(&mut winners, Player::Two, graph);
    }
    winners.resolve()
}

/// a one-vertex component: a live self-loop hands the vertex to the
/// player of its priority's parity; with no loop its owner is stuck and
/// loses the position
pub(crate) fn lone(sub: &Subgraph) -> Player {
    match sub.self_loop(0) {
        true => Player::of_parity(sub.priority(0)),
        false => sub.owner(0).opponent(),
    }
}
