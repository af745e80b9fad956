//! Word co-occurrence graph
//!
//! Undirected, unweighted: an edge exists once two stems have been seen
//! side by side, however many times that happens.

use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct GraphNode {
    pub lemma: String,
    /// Neighbour node ID -> edge weight
    pub edges: FxHashMap<u32, f64>,
}

impl GraphNode {
    fn new(lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            edges: FxHashMap::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct WordGraph {
    lemma_to_id: FxHashMap<String, u32>,
    nodes: Vec<GraphNode>,
}

impl WordGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a node for the given lemma, returning its ID
    pub fn get_or_create_node(&mut self, lemma: &str) -> u32 {
        if let Some(&id) = self.lemma_to_id.get(lemma) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.lemma_to_id.insert(lemma.to_string(), id);
        self.nodes.push(GraphNode::new(lemma));
        id
    }

    /// Connect two lemmas. Self-loops are ignored and nodes are only created
    /// here, so every node in the graph has at least one edge.
    pub fn connect(&mut self, a: &str, b: &str) {
        if a == b {
            return;
        }
        let from = self.get_or_create_node(a);
        let to = self.get_or_create_node(b);
        self.nodes[from as usize].edges.entry(to).or_insert(1.0);
        self.nodes[to as usize].edges.entry(from).or_insert(1.0);
    }

    /// Build from a word sequence: `lemmas[i]` is `None` for words that may
    /// not become nodes (stopwords), which also breaks adjacency.
    pub fn from_adjacent(lemmas: &[Option<String>]) -> Self {
        let mut graph = Self::new();
        for pair in lemmas.windows(2) {
            if let (Some(a), Some(b)) = (&pair[0], &pair[1]) {
                graph.connect(a, b);
            }
        }
        graph
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    pub fn node_id(&self, lemma: &str) -> Option<u32> {
        self.lemma_to_id.get(lemma).copied()
    }

    pub fn lemma(&self, id: u32) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.lemma.as_str())
    }

    pub fn neighbors(&self, id: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.nodes
            .get(id as usize)
            .into_iter()
            .flat_map(|n| n.edges.iter().map(|(&to, &w)| (to, w)))
    }

    pub fn total_weight(&self, id: u32) -> f64 {
        self.neighbors(id).map(|(_, w)| w).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
