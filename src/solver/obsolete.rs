use crate::game::graph::Graph;
use crate::Weight;
use crate::INFINITY;

/// the pluggable half of the n-step lookahead shared by both pruning
/// passes: what an unreached vertex is worth, how a successor is scored
/// from its neighbor, how the best score folds into the next value, and
/// when the settled value condemns an edge out of the pivot.
pub trait Lookahead {
    /// eta before any step for every vertex except the pivot, and the
    /// value of a vertex stranded without live successors
    fn unreached(&self, graph: &Graph, pivot: usize) -> Weight;
    /// candidate score of a successor holding `eta`, as seen from w
    fn score(&self, graph: &Graph, w: usize, eta: Weight, pivot: usize) -> Weight;
    /// next value of w given the best candidate score among its successors
    fn step(&self, graph: &Graph, w: usize, best: Weight, pivot: usize) -> Weight;
    /// does the settled lookahead of u condemn the edge (pivot, u)?
    fn obsolete(&self, graph: &Graph, pivot: usize, eta: Weight) -> bool;
}

/// lookahead of the equivalent mean-payoff game: values accumulate edge
/// weights, and ±infinity absorbs the addition instead of overflowing.
/// an edge is condemned when taking it costs its owner more than the
/// pivot's own weight can repay.
pub struct MeanPayoff {
    pub mu: Vec<Weight>,
}

impl Lookahead for MeanPayoff {
    fn unreached(&self, graph: &Graph, pivot: usize) -> Weight {
        graph.epsilon(pivot) * INFINITY
    }
    fn score(&self, graph: &Graph, w: usize, eta: Weight, _: usize) -> Weight {
        graph.epsilon(w) * eta
    }
    fn step(&self, graph: &Graph, w: usize, best: Weight, _: usize) -> Weight {
        match best == INFINITY || best == -INFINITY {
            true => graph.epsilon(w) * best,
            false => graph.epsilon(w) * best + self.mu[w],
        }
    }
    fn obsolete(&self, graph: &Graph, pivot: usize, eta: Weight) -> bool {
        let e = graph.epsilon(pivot);
        e * eta < -e * self.mu[pivot]
    }
}

/// parity-native lookahead: values are priorities folded through `phi`,
/// which turns positive odd values against the maximizer and routes
/// ±infinity by the pivot's sign. an edge is condemned when the settled
/// value caps out at a parity the owner cannot win with.
pub struct Parity;

impl Parity {
    fn phi(&self, graph: &Graph, eta: Weight, pivot: usize) -> Weight {
        if eta == INFINITY || eta == -INFINITY {
            graph.epsilon(pivot) * eta
        } else if eta % 2 == 1 {
            -eta
        } else {
            eta
        }
    }
}

impl Lookahead for Parity {
    fn unreached(&self, _: &Graph, _: usize) -> Weight {
        INFINITY
    }
    fn score(&self, graph: &Graph, w: usize, eta: Weight, pivot: usize) -> Weight {
        graph.epsilon(w) * self.phi(graph, eta, pivot)
    }
    fn step(&self, graph: &Graph, w: usize, best: Weight, pivot: usize) -> Weight {
        let folded = graph.epsilon(w) * self.phi(graph, best, pivot);
        (graph.priority(w) as Weight).max(folded)
    }
    fn obsolete(&self, graph: &Graph, pivot: usize, eta: Weight) -> bool {
        let cap = eta.max(graph.priority(pivot) as Weight);
        eta != INFINITY && cap % 2 != graph.owner(pivot).parity()
    }
}

/// one lookahead sweep: for every pivot vertex, iterate the n-step value
/// over the whole graph and collect the edges its rule condemns
pub fn sweep(graph: &Graph, rule: &impl Lookahead) -> Vec<(usize, usize)> {
    let n = graph.n();
    let mut condemned = Vec::new();
    for pivot in 0..n {
        let mut eta: Vec<Weight> = (0..n)
            .map(|w| match w == pivot {
                true => 0,
                false => rule.unreached(graph, pivot),
            })
            .collect();
        for _ in 1..n {
            eta = (0..n)
                .map(|w| {
                    if w == pivot {
                        return 0;
                    }
                    match graph
                        .successors(w)
                        .map(|u| rule.score(graph, w, eta[u], pivot))
                        .max()
                    {
                        Some(best) => rule.step(graph, w, best, pivot),
                        None => rule.unreached(graph, pivot),
                    }
                })
                .collect();
        }
        for u in graph.successors(pivot) {
            if rule.obsolete(graph, pivot, eta[u]) {
                condemned.push((pivot, u));
            }
        }
    }
    condemned
}

/// removing an obsolete edge can expose another, so sweep and cut until
/// a pass comes back clean. returns the number of edges removed.
pub fn prune(graph: &mut Graph, rule: &impl Lookahead) -> usize {
    let mut removed = 0;
    loop {
        let condemned = sweep(graph, rule);
        if condemned.is_empty() {
            break removed;
        }
        for (v, u) in condemned {
            graph.detach(v, u);
            removed += 1;
        }
    }
}
