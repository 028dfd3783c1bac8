use super::player::Player;
use super::vertex::Vertex;
use crate::Weight;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// a finite parity game: an ordered sequence of vertices with their
/// adjacency. the input contract forbids sinks, so every vertex keeps at
/// least one live edge until an obsolete-edge pass starts cutting. Clone
/// is the duplication primitive: each solver invocation owns its copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<Vertex>,
}

impl Graph {
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }
    pub fn n(&self) -> usize {
        self.vertices.len()
    }
    pub fn owner(&self, v: usize) -> Player {
        self.vertices[v].owner()
    }
    pub fn priority(&self, v: usize) -> usize {
        self.vertices[v].priority()
    }
    pub fn epsilon(&self, v: usize) -> Weight {
        self.owner(v).epsilon()
    }
    pub fn successors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.vertices[v].successors()
    }
    pub fn has_edge(&self, v: usize, u: usize) -> bool {
        self.successors(v).any(|w| w == u)
    }
    pub fn attach(&mut self, v: usize, u: usize) {
        self.vertices[v].attach(u);
    }
    pub fn detach(&mut self, v: usize, u: usize) {
        self.vertices[v].detach(u);
    }
    /// number of live edges in the whole graph
    pub fn edges(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum()
    }
    pub fn max_priority(&self) -> usize {
        self.vertices.iter().map(Vertex::priority).max().unwrap_or(0)
    }
}

// text rendering in the benchmark corpus format; the inverse of parsing.
// the owner digit is 1 for One and 0 for Two, and the closing semicolon
// is omitted on the final line, as in the corpus files themselves.
impl Display for Graph {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "parity {};", self.n() as i64 - 1)?;
        for v in 0..self.n() {
            let digit = match self.owner(v) {
                Player::One => 1,
                Player::Two => 0,
            };
            let successors = self
                .successors(v)
                .map(|u| u.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "{} {} {} {}", v, self.priority(v), digit, successors)?;
            if v != self.n() - 1 {
                writeln!(f, ";")?;
            }
        }
        Ok(())
    }
}

impl crate::Arbitrary for Graph {
    fn random() -> Self {
        let n = rand::random_range(2..10);
        let mut vertices = (0..n)
            .map(|_| {
                let owner = match rand::random_range(0..2) {
                    0 => Player::Two,
                    _ => Player::One,
                };
                Vertex::new(owner, rand::random_range(0..4))
            })
            .collect::<Vec<Vertex>>();
        for vertex in vertices.iter_mut() {
            for _ in 0..rand::random_range(1..4) {
                vertex.attach(rand::random_range(0..n));
            }
        }
        Self::new(vertices)
    }
}
