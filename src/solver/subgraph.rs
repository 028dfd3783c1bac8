use crate::game::graph::Graph;
use crate::game::player::Player;

/// the subgraph induced by a subset of vertices: local indices 0..len
/// with adjacency restricted to live edges whose endpoints both lie in
/// the subset. owners and priorities are read through to the underlying
/// graph; only the topology is rebuilt.
#[derive(Debug)]
pub struct Subgraph<'a> {
    graph: &'a Graph,
    verts: Vec<usize>,
    edges: Vec<Vec<usize>>,
}

impl<'a> Subgraph<'a> {
    pub fn induce(graph: &'a Graph, subset: &[usize]) -> Self {
        let mut local: Vec<Option<usize>> = vec![None; graph.n()];
        for (x, &v) in subset.iter().enumerate() {
            local[v] = Some(x);
        }
        let edges = subset
            .iter()
            .map(|&v| graph.successors(v).filter_map(|u| local[u]).collect())
            .collect();
        Self {
            graph,
            verts: subset.to_vec(),
            edges,
        }
    }
    pub fn len(&self) -> usize {
        self.verts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }
    /// the underlying graph, for anything scaled by the full game size
    pub fn ambient(&self) -> &'a Graph {
        self.graph
    }
    /// the global vertex behind local index x
    pub fn global(&self, x: usize) -> usize {
        self.verts[x]
    }
    pub fn owner(&self, x: usize) -> Player {
        self.graph.owner(self.verts[x])
    }
    pub fn priority(&self, x: usize) -> usize {
        self.graph.priority(self.verts[x])
    }
    /// local successors of local index x
    pub fn successors(&self, x: usize) -> &[usize] {
        &self.edges[x]
    }
    pub fn self_loop(&self, x: usize) -> bool {
        self.edges[x].contains(&x)
    }
    pub fn max_priority(&self) -> usize {
        (0..self.len()).map(|x| self.priority(x)).max().unwrap_or(0)
    }
}
