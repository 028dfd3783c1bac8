use crate::game::player::Player;

/// per-vertex winner map, refined monotonically over a solve. a winner,
/// once recorded, is never changed; the final extraction insists that
/// every vertex has been decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winners(Vec<Option<Player>>);

impl Winners {
    pub fn unknown(n: usize) -> Self {
        Self(vec![None; n])
    }
    pub fn get(&self, v: usize) -> Option<Player> {
        self.0[v]
    }
    pub fn decided(&self, v: usize) -> bool {
        self.0[v].is_some()
    }
    pub fn set(&mut self, v: usize, side: Player) {
        match self.0[v] {
            None => self.0[v] = Some(side),
            Some(held) => assert!(held == side, "winner flip at vertex {}", v),
        }
    }
    /// vertices currently won by `side`
    pub fn held(&self, side: Player) -> Vec<usize> {
        (0..self.0.len())
            .filter(|&v| self.0[v] == Some(side))
            .collect()
    }
    pub fn resolve(self) -> Vec<Player> {
        self.0
            .into_iter()
            .map(|winner| winner.expect("every vertex decided"))
            .collect()
    }
}
