use crate::game::graph::Graph;

/// strongly connected components of the subgraph induced by `subset`,
/// found by the path-based method: a growing path of open components
/// that collapse into one another whenever an edge lands back on the
/// path. components complete sinks-first; the result is reversed into
/// topological order, so a caller pushing it onto a stack pops sink
/// components before anything that can reach them. every inter-component
/// edge within the subset goes from a lower position to a strictly
/// higher one. edges leaving the subset are ignored, and each edge of
/// the local working copy is consumed at most once.
pub fn components(subset: &[usize], graph: &Graph) -> Vec<Vec<usize>> {
    let xn = subset.len();
    let mut local: Vec<Option<usize>> = vec![None; graph.n()];
    for (x, &v) in subset.iter().enumerate() {
        local[v] = Some(x);
    }
    let edges: Vec<Vec<usize>> = subset
        .iter()
        .map(|&v| graph.successors(v).filter_map(|u| local[u]).collect())
        .collect();

    let mut order = vec![usize::MAX; xn]; // preorder number, MAX while unvisited
    let mut member = vec![false; xn]; // already in an emitted component
    let mut cursor = vec![0; xn]; // next unconsumed edge per vertex
    let mut path: Vec<usize> = Vec::new(); // vertices of the open components
    let mut anchors: Vec<usize> = Vec::new(); // preorder marks delimiting them
    let mut sccs: Vec<Vec<usize>> = Vec::new();
    let mut next = 0;

    for root in 0..xn {
        if order[root] != usize::MAX {
            continue;
        }
        order[root] = next;
        next += 1;
        path.push(root);
        anchors.push(order[root]);
        let mut walk = vec![root];
        while let Some(&x) = walk.last() {
            if cursor[x] < edges[x].len() {
                let u = edges[x][cursor[x]];
                cursor[x] += 1;
                if order[u] == usize::MAX {
                    order[u] = next;
                    next += 1;
                    path.push(u);
                    anchors.push(order[u]);
                    walk.push(u);
                } else if !member[u] {
                    // u is still on the path: the edge closes a loop, so
                    // every component opened since u merges into one
                    while *anchors.last().expect("loop target keeps its anchor") > order[u] {
                        anchors.pop();
                    }
                }
            } else {
                walk.pop();
                if anchors.last() == Some(&order[x]) {
                    anchors.pop();
                    let from = path.iter().rposition(|&y| y == x).expect("finished vertex on path");
                    let component: Vec<usize> = path.drain(from..).collect();
                    for &y in component.iter() {
                        member[y] = true;
                    }
                    sccs.push(component.into_iter().map(|y| subset[y]).collect());
                }
            }
        }
    }

    sccs.reverse();
    sccs
}
