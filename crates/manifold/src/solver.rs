use crate::graph::{InterestGraph, Node};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }
}

/// Solver tuning knobs. The defaults are tuned for graphs around two dozen
/// nodes; significantly larger graphs may need more iterations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    pub iterations: usize,
    /// Distance from the viewport edge that positions are clamped into.
    pub padding: f64,
    /// Initial-placement jitter as a fraction of the grid cell size. `0.0`
    /// gives a fully deterministic grid start regardless of `seed`.
    pub jitter: f64,
    /// Seed for the jitter generator; identical seeds reproduce identical
    /// layouts.
    pub seed: u64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            iterations: 150,
            padding: 60.0,
            jitter: 0.3,
            seed: 0,
        }
    }
}

/// Visual footprint plus a fixed spacing margin. Collision distances and ideal
/// edge lengths are both sums of these radii.
pub fn effective_radius(node: &Node) -> f64 {
    let base = if node.is_hub { 32.0 } else { 12.0 };
    base + node.size * 14.0 + 35.0
}

/// One-shot iterative relaxation: pairwise repulsion, per-edge springs toward
/// an ideal separation, and a weak centering term, integrated under a linear
/// cooling schedule and clamped into the padded viewport after every step.
///
/// Returns one resting position per node, indexed like `graph.nodes()`.
/// Runs for the full iteration count with no convergence early-exit, so the
/// cost is a predictable O(iterations * N^2).
///
/// Set `MANIFOLD_SOLVER_TIMING=1` to print a timing summary to stderr.
pub fn solve(graph: &InterestGraph, viewport: Viewport, opts: &LayoutOptions) -> Vec<Point> {
    let nodes = graph.nodes();
    let n = nodes.len();
    if n == 0 {
        return Vec::new();
    }

    let timing_enabled = std::env::var("MANIFOLD_SOLVER_TIMING").ok().as_deref() == Some("1");
    let total_start = timing_enabled.then(std::time::Instant::now);

    let mut rng = XorShift64Star::new(opts.seed);
    let radii: Vec<f64> = nodes.iter().map(effective_radius).collect();
    let padding = opts.padding;
    let center = viewport.center();

    // Seed on a grid roughly matching the viewport aspect ratio, hubs first
    // then descending size, with per-axis jitter to break symmetry.
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        nodes[b]
            .is_hub
            .cmp(&nodes[a].is_hub)
            .then(nodes[b].size.total_cmp(&nodes[a].size))
    });

    let cols = (((n as f64) * viewport.width / viewport.height).sqrt().ceil() as usize).max(1);
    let rows = n.div_ceil(cols);
    let cell_w = (viewport.width - padding * 2.0) / cols as f64;
    let cell_h = (viewport.height - padding * 2.0) / rows as f64;

    let mut pos = vec![Point { x: 0.0, y: 0.0 }; n];
    for (slot, &idx) in order.iter().enumerate() {
        let col = (slot % cols) as f64;
        let row = (slot / cols) as f64;
        pos[idx] = Point {
            x: padding + cell_w * (col + 0.5) + (rng.next_f64_unit() - 0.5) * cell_w * opts.jitter,
            y: padding + cell_h * (row + 0.5) + (rng.next_f64_unit() - 0.5) * cell_h * opts.jitter,
        };
    }

    let endpoints = graph.edge_endpoints();
    let mut forces = vec![(0.0f64, 0.0f64); n];

    for iter in 0..opts.iterations {
        let temp = 1.0 - iter as f64 / opts.iterations as f64;
        forces.fill((0.0, 0.0));

        // Repulsion between all pairs: strong linear separation inside the
        // collision distance, inverse-square decay beyond it.
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[j].x - pos[i].x;
                let dy = pos[j].y - pos[i].y;
                let dist = (dx * dx + dy * dy).sqrt().max(0.1);

                let min_dist = radii[i] + radii[j];
                let force = if dist < min_dist {
                    (min_dist - dist) * 50.0
                } else {
                    80_000.0 / (dist * dist)
                };

                let fx = (dx / dist) * force;
                let fy = (dy / dist) * force;
                forces[i].0 -= fx;
                forces[i].1 -= fy;
                forces[j].0 += fx;
                forces[j].1 += fy;
            }
        }

        // Springs along edges: pull together when past the ideal separation,
        // push apart when inside it. Each edge contributes independently.
        for (edge, &(a, b)) in graph.edges().iter().zip(endpoints) {
            let dx = pos[b].x - pos[a].x;
            let dy = pos[b].y - pos[a].y;
            let dist = (dx * dx + dy * dy).sqrt().max(0.1);

            let ideal = radii[a] + radii[b] + 60.0;
            let force = (dist - ideal) * 0.01 * edge.strength;

            let fx = (dx / dist) * force;
            let fy = (dy / dist) * force;
            forces[a].0 += fx;
            forces[a].1 += fy;
            forces[b].0 -= fx;
            forces[b].1 -= fy;
        }

        // Weak centering so the cloud as a whole cannot drift off-center.
        for (i, p) in pos.iter().enumerate() {
            forces[i].0 += (center.x - p.x) * 0.005;
            forces[i].1 += (center.y - p.y) * 0.005;
        }

        // Integrate with the cooled displacement cap, then clamp into bounds.
        let max_move = 20.0 * temp;
        for (p, &(fx, fy)) in pos.iter_mut().zip(&forces) {
            let mag = (fx * fx + fy * fy).sqrt().max(0.1);
            let scale = (max_move / mag).min(1.0);
            p.x = (p.x + fx * scale).min(viewport.width - padding).max(padding);
            p.y = (p.y + fy * scale).min(viewport.height - padding).max(padding);
        }
    }

    if let Some(start) = total_start {
        eprintln!(
            "[manifold-solver-timing] total={:?} nodes={} edges={} iterations={}",
            start.elapsed(),
            n,
            graph.edges().len(),
            opts.iterations
        );
    }

    pos
}

/// xorshift64* generator. Keeps initial jitter reproducible for a given seed
/// without pulling in an RNG crate.
#[derive(Debug, Clone)]
struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D_u64)
    }

    fn next_f64_unit(&mut self) -> f64 {
        // [0, 1) with 53 bits of precision.
        let u = self.next_u64() >> 11;
        (u as f64) / ((1u64 << 53) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::XorShift64Star;
    use crate::graph::{Category, Node};

    fn node(size: f64, is_hub: bool) -> Node {
        Node {
            id: "n".to_string(),
            label: "n".to_string(),
            description: String::new(),
            category: Category::Tech,
            size,
            is_hub,
        }
    }

    #[test]
    fn effective_radius_combines_tier_size_and_margin() {
        assert_eq!(super::effective_radius(&node(1.5, true)), 88.0);
        assert_eq!(super::effective_radius(&node(0.5, false)), 54.0);
    }

    #[test]
    fn xorshift64star_is_deterministic_per_seed() {
        let mut a = XorShift64Star::new(42);
        let mut b = XorShift64Star::new(42);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn xorshift64star_unit_samples_stay_in_range() {
        let mut rng = XorShift64Star::new(7);
        for _ in 0..256 {
            let v = rng.next_f64_unit();
            assert!((0.0..1.0).contains(&v), "sample out of range: {v}");
        }
    }

    #[test]
    fn zero_seed_is_remapped_rather_than_degenerate() {
        // xorshift has an all-zeroes fixed point; seed 0 must still produce a
        // moving sequence.
        let mut rng = XorShift64Star::new(0);
        let first = rng.next_u64();
        let second = rng.next_u64();
        assert_ne!(first, 0);
        assert_ne!(first, second);
    }
}
