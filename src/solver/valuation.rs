use crate::game::player::Player;
use std::cmp::Ordering;

/// outcome of the unique play from a vertex under a fixed strategy pair.
/// a play either terminates (Two declined to keep playing), in which
/// case `counts` records how often each priority occurred along it, or
/// settles into a cycle won by the recorded player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Valuation {
    pub cycle: Option<Player>,
    pub counts: Vec<usize>,
}

impl Valuation {
    /// a finite play seeing nothing yet, over priorities 0..=top
    pub fn finite(top: usize) -> Self {
        Self {
            cycle: None,
            counts: vec![0; top + 1],
        }
    }
    /// the largest priority occurring along a finite play
    fn peak(&self) -> Option<usize> {
        (0..self.counts.len()).rev().find(|&p| self.counts[p] > 0)
    }
}

/// total order on candidate next states driving the switch pass. `a` and
/// `b` are successor vertices, or None for Two's option of quitting the
/// play. Greater means Two prefers b over a, Less means One does. quits
/// compare as an empty finite play; cycles compare by parity and beat or
/// lose to every finite play; finite plays compare lexicographically
/// from the highest differing priority, where Two wants many visits to
/// an even peak and few to an odd one.
pub fn prefer(vals: &[Valuation], a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        _ if a == b => Ordering::Equal,
        (None, None) => Ordering::Equal,
        (None, Some(y)) => match vals[y].cycle {
            Some(Player::One) => Ordering::Less,
            Some(Player::Two) => Ordering::Greater,
            None => match vals[y].peak() {
                None => Ordering::Equal,
                Some(p) if p % 2 == 0 => Ordering::Greater,
                Some(_) => Ordering::Less,
            },
        },
        (Some(_), None) => prefer(vals, b, a).reverse(),
        (Some(x), Some(y)) => match (vals[x].cycle, vals[y].cycle) {
            (Some(cx), Some(cy)) if cx == cy => Ordering::Equal,
            (_, Some(Player::Two)) => Ordering::Greater,
            (_, Some(Player::One)) => Ordering::Less,
            (Some(Player::One), None) => Ordering::Greater,
            (Some(Player::Two), None) => Ordering::Less,
            (None, None) => {
                for p in (0..vals[x].counts.len()).rev() {
                    let (cx, cy) = (vals[x].counts[p], vals[y].counts[p]);
                    if cx == cy {
                        continue;
                    }
                    return match (p % 2 == 0) == (cx < cy) {
                        true => Ordering::Greater,
                        false => Ordering::Less,
                    };
                }
                Ordering::Equal
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<Valuation> {
        let mut vals = vec![Valuation::finite(3); 6];
        vals[0].cycle = Some(Player::Two);
        vals[1].cycle = Some(Player::One);
        vals[2].counts = vec![1, 0, 0, 0]; // peak 0, even
        vals[3].counts = vec![0, 1, 0, 0]; // peak 1, odd
        vals[4].counts = vec![2, 1, 0, 0];
        vals[5].counts = vec![0, 0, 0, 0]; // empty, ties with a quit
        vals
    }

    #[test]
    fn cycles_compare_by_parity() {
        let vals = fixture();
        assert_eq!(prefer(&vals, Some(1), Some(0)), Ordering::Greater);
        assert_eq!(prefer(&vals, Some(0), Some(1)), Ordering::Less);
        assert_eq!(prefer(&vals, Some(0), Some(0)), Ordering::Equal);
    }

    #[test]
    fn even_cycles_beat_finite_plays_beat_odd_cycles() {
        let vals = fixture();
        assert_eq!(prefer(&vals, Some(3), Some(0)), Ordering::Greater);
        assert_eq!(prefer(&vals, Some(3), Some(1)), Ordering::Less);
        assert_eq!(prefer(&vals, Some(1), Some(3)), Ordering::Greater);
        assert_eq!(prefer(&vals, Some(0), Some(3)), Ordering::Less);
    }

    #[test]
    fn quits_compare_by_the_peak_parity() {
        let vals = fixture();
        assert_eq!(prefer(&vals, None, Some(2)), Ordering::Greater);
        assert_eq!(prefer(&vals, None, Some(3)), Ordering::Less);
        assert_eq!(prefer(&vals, None, Some(0)), Ordering::Greater);
        assert_eq!(prefer(&vals, None, Some(1)), Ordering::Less);
        assert_eq!(prefer(&vals, None, Some(5)), Ordering::Equal);
    }

    #[test]
    fn finite_plays_compare_at_the_highest_difference() {
        let vals = fixture();
        // 2 vs 3 differ first at priority 1, odd: fewer visits is better
        assert_eq!(prefer(&vals, Some(3), Some(2)), Ordering::Greater);
        // 3 vs 4 differ at priority 0, even: more visits is better
        assert_eq!(prefer(&vals, Some(3), Some(4)), Ordering::Greater);
        assert_eq!(prefer(&vals, Some(4), Some(4)), Ordering::Equal);
    }

    #[test]
    fn the_order_is_antisymmetric() {
        let vals = fixture();
        let states = [None, Some(0), Some(1), Some(2), Some(3), Some(4), Some(5)];
        for &a in states.iter() {
            assert_eq!(prefer(&vals, a, a), Ordering::Equal);
            for &b in states.iter() {
                assert_eq!(prefer(&vals, a, b), prefer(&vals, b, a).reverse());
            }
        }
    }
}
