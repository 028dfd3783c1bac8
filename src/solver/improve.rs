use super::subgraph::Subgraph;
use super::valuation::prefer;
use super::valuation::Valuation;
use crate::game::player::Player;
use std::cmp::Ordering;

/// strategy improvement over one induced subgraph. Two starts out
/// quitting everywhere and One follows first edges; each round the play
/// valuations are recomputed and One switches to better responses until
/// none remain, then Two improves once. when neither side can improve,
/// the vertices whose plays settle into even cycles are exactly the ones
/// Two wins.
pub fn solve(sub: &Subgraph) -> Vec<Player> {
    let xn = sub.len();
    if xn == 1 {
        return vec![super::lone(sub)];
    }
    let mut sigma: Vec<Option<usize>> = vec![None; xn];
    let mut tau: Vec<Option<usize>> = (0..xn)
        .map(|x| match sub.owner(x) {
            Player::One => sub.successors(x).first().copied(),
            Player::Two => None,
        })
        .collect();
    let mut vals;
    loop {
        loop {
            vals = valuations(sub, &sigma, &tau);
            if !switch(sub, Player::One, &vals, &mut sigma, &mut tau) {
                break;
            }
        }
        if !switch(sub, Player::Two, &vals, &mut sigma, &mut tau) {
            break;
        }
    }
    vals.into_iter()
        .map(|val| match val.cycle {
            Some(Player::Two) => Player::Two,
            _ => Player::One,
        })
        .collect()
}

/// the next vertex of the play at x, or None when Two quits there
fn step(sub: &Subgraph, sigma: &[Option<usize>], tau: &[Option<usize>], x: usize) -> Option<usize> {
    match sub.owner(x) {
        Player::One => tau[x],
        Player::Two => sigma[x],
    }
}

/// the play from every vertex, walked iteratively with a three-state
/// memo: each walk either quits, runs into a vertex whose valuation is
/// already known, or bites its own tail. in the last case the cycle's
/// maximum priority decides a winner that every cycle vertex inherits,
/// and the vertices leading in prepend their own priorities on unwind.
fn valuations(sub: &Subgraph, sigma: &[Option<usize>], tau: &[Option<usize>]) -> Vec<Valuation> {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Unseen,
        Walking,
        Done,
    }
    let xn = sub.len();
    let top = sub.max_priority();
    let mut state = vec![State::Unseen; xn];
    let mut vals = vec![Valuation::finite(top); xn];
    for start in 0..xn {
        if state[start] == State::Done {
            continue;
        }
        let mut path = Vec::new();
        let mut x = start;
        // descend until the walk leaves known territory
        let tail = loop {
            match state[x] {
                State::Done => break Some(x),
                State::Walking => break Some(x),
                State::Unseen => {
                    state[x] = State::Walking;
                    path.push(x);
                    match step(sub, sigma, tau, x) {
                        Some(w) => x = w,
                        None => break None,
                    }
                }
            }
        };
        let mut open = path.len();
        match tail {
            // the play ends where Two quit: its own priority, once
            None => {
                let z = path[open - 1];
                vals[z].counts[sub.priority(z)] = 1;
                state[z] = State::Done;
                open -= 1;
            }
            Some(w) if state[w] == State::Walking => {
                // the walk bit its own tail: everything from w onward
                // cycles, and the cycle's peak priority names the winner
                let from = path.iter().position(|&y| y == w).expect("tail on walk");
                let peak = path[from..]
                    .iter()
                    .map(|&y| sub.priority(y))
                    .max()
                    .expect("nonempty cycle");
                for &y in path[from..].iter() {
                    vals[y].cycle = Some(Player::of_parity(peak));
                    state[y] = State::Done;
                }
                open = from;
            }
            Some(_) => {}
        }
        // unwind the rest of the walk against its settled successors
        for &v in path[..open].iter().rev() {
            let w = step(sub, sigma, tau, v).expect("open vertices stepped forward");
            match vals[w].cycle {
                Some(side) => vals[v].cycle = Some(side),
                None => {
                    vals[v].counts = vals[w].counts.clone();
                    vals[v].counts[sub.priority(v)] += 1;
                }
            }
            state[v] = State::Done;
        }
    }
    vals
}

/// one switching pass for `side`: at each of its vertices, adopt any
/// successor the valuation order favors over the current choice, chaining
/// through improvements left to right; Two additionally falls back to
/// quitting when that beats its best edge. reports whether anything moved.
fn switch(
    sub: &Subgraph,
    side: Player,
    vals: &[Valuation],
    sigma: &mut [Option<usize>],
    tau: &mut [Option<usize>],
) -> bool {
    let mut switched = false;
    for x in 0..sub.len() {
        if sub.owner(x) != side {
            continue;
        }
        let mut u = match side {
            Player::One => tau[x],
            Player::Two => sigma[x],
        };
        for &w in sub.successors(x) {
            let verdict = prefer(vals, u, Some(w));
            match side {
                Player::One if verdict == Ordering::Less => {
                    tau[x] = Some(w);
                    u = Some(w);
                    switched = true;
                }
                Player::Two if verdict == Ordering::Greater => {
                    sigma[x] = Some(w);
                    u = Some(w);
                    switched = true;
                }
                _ => {}
            }
        }
        if side == Player::Two && prefer(vals, u, None) == Ordering::Greater {
            sigma[x] = None;
            switched = true;
        }
    }
    switched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::graph::Graph;
    use crate::game::vertex::Vertex;

    fn whole(graph: &Graph) -> Vec<Player> {
        let subset = (0..graph.n()).collect::<Vec<_>>();
        solve(&Subgraph::induce(graph, &subset))
    }

    #[test]
    fn a_lone_even_loop_is_twos() {
        let mut graph = Graph::new(vec![Vertex::new(Player::One, 2)]);
        graph.attach(0, 0);
        assert_eq!(whole(&graph), vec![Player::Two]);
    }

    #[test]
    fn a_lone_odd_loop_is_ones() {
        let mut graph = Graph::new(vec![Vertex::new(Player::Two, 3)]);
        graph.attach(0, 0);
        assert_eq!(whole(&graph), vec![Player::One]);
    }

    #[test]
    fn the_forced_even_cycle_goes_to_two() {
        let mut graph = Graph::new(vec![
            Vertex::new(Player::One, 1),
            Vertex::new(Player::Two, 2),
        ]);
        graph.attach(0, 1);
        graph.attach(1, 0);
        assert_eq!(whole(&graph), vec![Player::Two, Player::Two]);
    }

    #[test]
    fn one_steers_between_two_winning_options() {
        // v0 (One, 1) chooses between an odd two-cycle with v1 and an
        // odd self-loop at v2: One wins everywhere either way
        let mut graph = Graph::new(vec![
            Vertex::new(Player::One, 1),
            Vertex::new(Player::Two, 0),
            Vertex::new(Player::Two, 3),
        ]);
        graph.attach(0, 1);
        graph.attach(0, 2);
        graph.attach(1, 0);
        graph.attach(2, 2);
        assert_eq!(whole(&graph), vec![Player::One; 3]);
    }

    #[test]
    fn valuations_count_priorities_along_finite_plays() {
        // all of Two's vertices quit under the initial strategies, so
        // the play from v0 runs v0 -> v1 and stops
        let mut graph = Graph::new(vec![
            Vertex::new(Player::Two, 1),
            Vertex::new(Player::Two, 2),
        ]);
        graph.attach(0, 1);
        graph.attach(1, 0);
        let subset = vec![0, 1];
        let sub = Subgraph::induce(&graph, &subset);
        let sigma = vec![Some(1), None];
        let tau = vec![None, None];
        let vals = valuations(&sub, &sigma, &tau);
        assert_eq!(vals[1].cycle, None);
        assert_eq!(vals[1].counts, vec![0, 0, 1]);
        assert_eq!(vals[0].counts, vec![0, 1, 1]);
    }

    #[test]
    fn valuations_mark_whole_cycles() {
        let mut graph = Graph::new(vec![
            Vertex::new(Player::Two, 1),
            Vertex::new(Player::Two, 2),
            Vertex::new(Player::Two, 0),
        ]);
        graph.attach(0, 1);
        graph.attach(1, 2);
        graph.attach(2, 1);
        let sub = Subgraph::induce(&graph, &[0, 1, 2]);
        let sigma = vec![Some(1), Some(2), Some(1)];
        let tau = vec![None, None, None];
        let vals = valuations(&sub, &sigma, &tau);
        assert_eq!(vals[1].cycle, Some(Player::Two));
        assert_eq!(vals[2].cycle, Some(Player::Two));
        assert_eq!(vals[0].cycle, Some(Player::Two));
    }
}
