use super::player::Player;

/// a single position of the game: who moves, its priority, and where it
/// can move to. removed edges stay in place as None so that slot indices
/// remain stable for anything iterating while the graph is being pruned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    owner: Player,
    priority: usize,
    edges: Vec<Option<usize>>,
}

impl Vertex {
    pub fn new(owner: Player, priority: usize) -> Self {
        Self {
            owner,
            priority,
            edges: Vec::new(),
        }
    }
    pub fn owner(&self) -> Player {
        self.owner
    }
    pub fn priority(&self) -> usize {
        self.priority
    }
    /// live successors, in declaration order, skipping removed slots
    pub fn successors(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().flatten().copied()
    }
    /// number of live outgoing edges
    pub fn degree(&self) -> usize {
        self.successors().count()
    }
    /// add an edge unless one to the same target is already live
    pub fn attach(&mut self, target: usize) {
        if !self.edges.contains(&Some(target)) {
            self.edges.push(Some(target));
        }
    }
    /// blank out the edge to `target` without compacting the slot list
    pub fn detach(&mut self, target: usize) {
        let slot = self
            .edges
            .iter_mut()
            .find(|slot| **slot == Some(target))
            .expect("detached edge is live");
        *slot = None;
    }
}
