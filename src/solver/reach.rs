use super::winner::Winners;
use crate::game::graph::Graph;
use crate::game::player::Player;

/// the attractor closure of the equivalent reachability game: every
/// vertex from which `side` can force entry into its current winning set
/// is marked for `side`. a vertex owned by `side` joins as soon as one
/// live edge reaches the set; an opponent vertex joins only once all of
/// its live edges do. already-decided vertices are never touched, so the
/// winning sets only ever grow.
pub fn reach(winners: &mut Winners, side: Player, graph: &Graph) {
    let n = graph.n();
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    for v in 0..n {
        for u in graph.successors(v) {
            preds[u].push(v);
        }
    }
    let mut queue = winners.held(side);
    let mut qi = 0;
    while qi < queue.len() {
        let w = queue[qi];
        qi += 1;
        for &v in preds[w].iter() {
            if winners.decided(v) {
                continue;
            }
            let attracted = match graph.owner(v) == side {
                true => true,
                false => graph.successors(v).all(|u| winners.get(u) == Some(side)),
            };
            if attracted {
                winners.set(v, side);
                queue.push(v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::vertex::Vertex;

    // v0 (Two) -> v1; v1 (One) -> v1 and -> v0: once v1 is held by a
    // side that v0 can reach, v0 follows through its own edge
    fn funnel() -> Graph {
        let mut graph = Graph::new(vec![
            Vertex::new(Player::Two, 1),
            Vertex::new(Player::One, 0),
        ]);
        graph.attach(0, 1);
        graph.attach(1, 1);
        graph.attach(1, 0);
        graph
    }

    #[test]
    fn owner_joins_through_a_single_edge() {
        let graph = funnel();
        let mut winners = Winners::unknown(2);
        winners.set(1, Player::Two);
        reach(&mut winners, Player::Two, &graph);
        assert_eq!(winners.get(0), Some(Player::Two));
    }

    #[test]
    fn opponent_needs_every_edge() {
        // v2 (Two) with edges into both v0 and v1; only v0 is held by One
        let mut graph = Graph::new(vec![
            Vertex::new(Player::One, 0),
            Vertex::new(Player::One, 0),
            Vertex::new(Player::Two, 2),
        ]);
        graph.attach(0, 0);
        graph.attach(1, 1);
        graph.attach(2, 0);
        graph.attach(2, 1);
        let mut winners = Winners::unknown(3);
        winners.set(0, Player::One);
        reach(&mut winners, Player::One, &graph);
        assert_eq!(winners.get(2), None);
        winners.set(1, Player::One);
        reach(&mut winners, Player::One, &graph);
        assert_eq!(winners.get(2), Some(Player::One));
    }

    #[test]
    fn closure_is_monotone() {
        let graph = funnel();
        let mut winners = Winners::unknown(2);
        winners.set(1, Player::Two);
        reach(&mut winners, Player::Two, &graph);
        let before = winners.held(Player::Two);
        reach(&mut winners, Player::Two, &graph);
        reach(&mut winners, Player::One, &graph);
        assert_eq!(winners.held(Player::Two), before);
    }

    #[test]
    fn removed_edges_do_not_attract() {
        let mut graph = funnel();
        graph.detach(0, 1);
        graph.attach(0, 0);
        let mut winners = Winners::unknown(2);
        winners.set(1, Player::Two);
        reach(&mut winners, Player::Two, &graph);
        assert_eq!(winners.get(0), None);
    }
}
