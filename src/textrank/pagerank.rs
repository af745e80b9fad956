//! PageRank by power iteration over a [`WordGraph`].

use super::graph::WordGraph;

#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores indexed by node ID
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub delta: f64,
    pub converged: bool,
}

#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    pub max_iterations: usize,
    /// L1 convergence threshold
    pub threshold: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-4,
        }
    }
}

impl PageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &WordGraph) -> PageRankResult {
        let n = graph.node_count();
        if n == 0 {
            return PageRankResult {
                scores: Vec::new(),
                iterations: 0,
                delta: 0.0,
                converged: true,
            };
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];
        let teleport = (1.0 - self.damping) / n as f64;
        let totals: Vec<f64> = (0..n as u32).map(|id| graph.total_weight(id)).collect();

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Every node has an edge, so there is no dangling mass to spread.
            new_scores.fill(teleport);
            for (node, &node_score) in scores.iter().enumerate() {
                let total = totals[node];
                if total > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        new_scores[neighbor as usize] += self.damping * node_score * weight / total;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);
        }

        PageRankResult {
            scores,
            iterations,
            delta,
            converged: delta <= self.threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WordGraph {
        let mut graph = WordGraph::new();
        graph.connect("a", "b");
        graph.connect("b", "c");
        graph.connect("c", "a");
        graph
    }

    fn star() -> WordGraph {
        let mut graph = WordGraph::new();
        graph.connect("hub", "s1");
        graph.connect("hub", "s2");
        graph.connect("hub", "s3");
        graph
    }

    #[test]
    fn test_triangle_equal_scores() {
        let result = PageRank::new().run(&triangle());

        assert!(result.converged);
        assert!(result.delta <= 1e-4);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_star_hub_highest() {
        let graph = star();
        let result = PageRank::new().run(&graph);

        let hub = graph.node_id("hub").unwrap() as usize;
        for (i, &score) in result.scores.iter().enumerate() {
            if i != hub {
                assert!(result.scores[hub] > score);
            }
        }
    }

    #[test]
    fn test_damping_flattens_scores() {
        let graph = star();
        let hub = graph.node_id("hub").unwrap() as usize;
        let spread = |result: PageRankResult| {
            let min = result.scores.iter().cloned().fold(f64::MAX, f64::min);
            result.scores[hub] - min
        };

        let strong = spread(PageRank::new().run(&graph));
        let weak = spread(PageRank::new().with_damping(0.2).run(&graph));
        assert!(weak < strong);

        let flat = PageRank::new().with_damping(0.0).run(&graph);
        for score in &flat.scores {
            assert!((score - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn test_scores_sum_to_one() {
        let result = PageRank::new().run(&star());
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_graph() {
        let result = PageRank::new().run(&WordGraph::new());

        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_max_iterations_returns_partial() {
        let result = PageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0)
            .run(&star());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }
}
