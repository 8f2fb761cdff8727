use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use manifold::graph::{Category, Edge, InterestGraph, Node};
use manifold::{LayoutOptions, Viewport, solve};
use std::hint::black_box;

#[derive(Debug, Clone)]
struct GraphSpec {
    node_count: usize,
}

impl GraphSpec {
    fn build(&self) -> InterestGraph {
        let categories = [
            Category::Tech,
            Category::Science,
            Category::Philosophy,
            Category::Creative,
        ];
        let nodes: Vec<Node> = (0..self.node_count)
            .map(|i| Node {
                id: format!("n{i}"),
                label: format!("n{i}"),
                description: String::new(),
                category: categories[i % categories.len()],
                size: 0.5 + 0.1 * (i % 10) as f64,
                is_hub: i % 8 == 0,
            })
            .collect();

        // A ring for connectivity plus spokes from every hub.
        let mut edges: Vec<Edge> = (0..self.node_count)
            .map(|i| Edge {
                from: format!("n{i}"),
                to: format!("n{}", (i + 1) % self.node_count),
                strength: 0.7,
                description: None,
            })
            .collect();
        for hub in (0..self.node_count).step_by(8) {
            for spoke in 1..4 {
                let to = (hub + spoke * 2) % self.node_count;
                if to != hub {
                    edges.push(Edge {
                        from: format!("n{hub}"),
                        to: format!("n{to}"),
                        strength: 0.5,
                        description: None,
                    });
                }
            }
        }

        InterestGraph::new(nodes, edges).expect("bench graph is valid")
    }
}

fn bench_solve(c: &mut Criterion) {
    let viewport = Viewport::new(1200.0, 700.0);
    let opts = LayoutOptions::default();

    let mut group = c.benchmark_group("solve");
    for node_count in [23usize, 64, 128] {
        let graph = GraphSpec { node_count }.build();
        group.bench_with_input(
            BenchmarkId::from_parameter(node_count),
            &graph,
            |b, graph| b.iter(|| solve(black_box(graph), viewport, &opts)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
