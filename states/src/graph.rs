use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, {:?}", .0)]
    DuplicateEdge(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first is the start node, last is the end node
    route: Vec<T>,
}

impl<T> DepRoute<T> {
    pub fn nodes(&self) -> &[T] {
        &self.route
    }
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, init)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in init {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Directed dependency graph: an edge `from -> to` means `to` reads `from`.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    edges: BTreeMap<Node, Vec<Node>>,
    nodes: BTreeSet<Node>,

    downstream_cache: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
            nodes: BTreeSet::new(),
            downstream_cache: BTreeMap::new(),
        }
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node);
    }

    pub fn route_to(&mut self, from: Node, to: Node) {
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.edges.entry(from).or_default().push(to);
        self.downstream_cache.clear();
    }

    /// Nodes that read `node` directly.
    pub fn direct_dependents(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges.get(&node).into_iter().flatten().copied()
    }

    /// Every node reachable from `node`, i.e. everything that must be refreshed when it
    /// changes. Cached until the next `route_to`.
    pub fn downstream(&mut self, node: Node) -> impl Iterator<Item = &Node> {
        if !self.downstream_cache.contains_key(&node) {
            let collected = self.collect_downstream(node);
            self.downstream_cache.insert(node, collected);
        }
        self.downstream_cache.get(&node).into_iter().flatten()
    }

    fn collect_downstream(&self, node: Node) -> BTreeSet<Node> {
        let mut collected = BTreeSet::new();
        let mut queue = VecDeque::from([node]);

        while let Some(current) = queue.pop_front() {
            for to in self.direct_dependents(current) {
                // the `collected` check also stops us from spinning on a cycle
                if collected.insert(to) {
                    queue.push_back(to);
                }
            }
        }

        collected
    }

    /// Kahn's algorithm. Returns every node with each node placed after all of its inputs.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree: BTreeMap<Node, usize> = self.nodes.iter().map(|n| (*n, 0)).collect();

        for (from, targets) in &self.edges {
            let mut seen = BTreeSet::new();
            for to in targets {
                if !seen.insert(*to) {
                    return Err(TopologyError::DuplicateEdge(DepRoute {
                        route: vec![*from, *to],
                    }));
                }
                *in_degree.entry(*to).or_default() += 1;
            }
        }

        let mut ready: VecDeque<Node> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(node, _)| *node)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(node) = ready.pop_front() {
            order.push(node);
            for to in self.direct_dependents(node) {
                if let Some(degree) = in_degree.get_mut(&to) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(to);
                    }
                }
            }
        }

        if order.len() == self.nodes.len() {
            return Ok(order);
        }

        let remaining: Vec<Node> = self
            .nodes
            .iter()
            .filter(|node| !order.contains(node))
            .copied()
            .collect();
        Err(TopologyError::CycleDetected(DepRoute {
            route: self.find_cycle(&remaining).unwrap_or_default(),
        }))
    }

    fn find_cycle(&self, nodes: &[Node]) -> Option<Vec<Node>> {
        let mut visited = BTreeSet::new();
        let mut path: Vec<Node> = Vec::new();
        let mut stack: Vec<(Node, std::vec::IntoIter<Node>)> = Vec::new();

        let neighbours = |node: Node| {
            self.direct_dependents(node)
                .filter(|n| nodes.contains(n))
                .collect::<Vec<_>>()
                .into_iter()
        };

        for &start in nodes {
            if !visited.insert(start) {
                continue;
            }
            path.push(start);
            stack.push((start, neighbours(start)));

            while let Some((_, pending)) = stack.last_mut() {
                match pending.next() {
                    Some(next) if path.contains(&next) => {
                        let pos = path.iter().position(|n| *n == next)?;
                        let mut cycle = path[pos..].to_vec();
                        cycle.push(next);
                        return Some(cycle);
                    }
                    Some(next) => {
                        if visited.insert(next) {
                            path.push(next);
                            stack.push((next, neighbours(next)));
                        }
                    }
                    None => {
                        stack.pop();
                        path.pop();
                    }
                }
            }
        }
        None
    }
}
