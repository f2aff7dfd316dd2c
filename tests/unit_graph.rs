// tests/unit_graph.rs
//! Graph engines checked against brute-force references on seeded random graphs.

use std::collections::HashSet;

use flycombi_core::graph::ordering::quick_sort;
use flycombi_core::graph::{
    approximate_centrality, bounded_cycle, breadth_first, minimum_spanning_tree, shortest_path,
    WeightedGraph,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N: usize = 12;

/// Random graph over `0..N` with integral weights in `0..10`.
fn random_graph(seed: u64, density: f64) -> WeightedGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = WeightedGraph::new();
    for v in 0..N {
        g.add_vertex(v);
    }
    for u in 0..N {
        for v in u + 1..N {
            if rng.gen_bool(density) {
                g.add_edge(&u, &v, f64::from(rng.gen_range(0..10_u32)));
            }
        }
    }
    g
}

/// All-pairs distances; `hops` ignores weights.
fn floyd_warshall(g: &WeightedGraph<usize>, hops: bool) -> Vec<Vec<f64>> {
    let mut d = vec![vec![f64::INFINITY; N]; N];
    for (u, row) in d.iter_mut().enumerate() {
        row[u] = 0.0;
    }
    for ((u, v), w) in g.edges() {
        let w = if hops { 1.0 } else { w };
        d[u][v] = d[u][v].min(w);
        d[v][u] = d[v][u].min(w);
    }
    for k in 0..N {
        for i in 0..N {
            for j in 0..N {
                if d[i][k] + d[k][j] < d[i][j] {
                    d[i][j] = d[i][k] + d[k][j];
                }
            }
        }
    }
    d
}

/// Kruskal restricted to the vertices in `within`, with a tiny union-find.
fn kruskal_weight(g: &WeightedGraph<usize>, within: &HashSet<usize>) -> f64 {
    fn find(parent: &mut [usize], x: usize) -> usize {
        let mut root = x;
        while parent[root] != root {
            root = parent[root];
        }
        parent[x] = root;
        root
    }
    let mut parent: Vec<usize> = (0..N).collect();
    let mut total = 0.0;
    for ((u, v), w) in g.sorted_edges() {
        if !within.contains(&u) || !within.contains(&v) {
            continue;
        }
        let (a, b) = (find(&mut parent, u), find(&mut parent, v));
        if a != b {
            parent[a] = b;
            total += w;
        }
    }
    total
}

/// Vertices reachable from `start`, `start` included.
fn component(g: &WeightedGraph<usize>, start: usize) -> HashSet<usize> {
    let reach = breadth_first(g, &start, &[]).expect("vertex exists");
    reach.depth.keys().copied().collect()
}

#[test]
fn test_dijkstra_matches_floyd_warshall() {
    for seed in 0..10 {
        let g = random_graph(seed, 0.3);
        let reference = floyd_warshall(&g, false);
        for source in 0..N {
            let paths = shortest_path(&g, &source, &[]).expect("source exists");
            for target in 0..N {
                assert_eq!(
                    paths.distance(&target),
                    reference[source][target],
                    "seed {seed}: {source} -> {target}"
                );
            }
        }
    }
}

#[test]
fn test_dijkstra_path_cost_matches_distance() {
    let g = random_graph(77, 0.25);
    let paths = shortest_path(&g, &3, &[]).expect("source exists");
    for target in 0..N {
        let Some(path) = paths.path_to(&target) else {
            assert_eq!(paths.distance(&target), f64::INFINITY);
            continue;
        };
        let cost: f64 = path
            .windows(2)
            .map(|pair| g.weight(&pair[0], &pair[1]).expect("path follows edges"))
            .sum();
        assert_eq!(cost, paths.distance(&target));
    }
}

#[test]
fn test_bfs_depth_is_minimum_hops() {
    for seed in 0..10 {
        let g = random_graph(seed, 0.2);
        let reference = floyd_warshall(&g, true);
        let search = breadth_first(&g, &0, &[]).expect("source exists");
        for v in 0..N {
            match search.depth.get(&v) {
                Some(depth) => assert_eq!(*depth as f64, reference[0][v], "seed {seed}"),
                None => assert_eq!(reference[0][v], f64::INFINITY, "seed {seed}"),
            }
        }
    }
}

#[test]
fn test_prim_spans_root_component_with_kruskal_weight() {
    let mut disconnected = 0;
    let samples = (0..20).flat_map(|seed| [(seed, 0.12), (seed, 0.35)]);
    for (seed, density) in samples {
        let g = random_graph(seed, density);
        let tree = minimum_spanning_tree(&g, &mut StdRng::seed_from_u64(seed));
        assert_eq!(tree.vertex_count(), N, "seed {seed}");

        // Any spanned vertex identifies the root's component; no edges means an isolated root.
        let Some(spanned) = (0..N).find(|v| !tree.neighbors(v).is_empty()) else {
            assert_eq!(tree.edge_count(), 0, "seed {seed}");
            continue;
        };
        let reach = component(&g, spanned);
        if reach.len() < N {
            disconnected += 1;
        }

        assert_eq!(tree.edge_count(), reach.len() - 1, "seed {seed}");
        for v in 0..N {
            assert_eq!(
                tree.neighbors(&v).is_empty(),
                !reach.contains(&v),
                "seed {seed}: vertex {v}"
            );
        }
        let weight: f64 = tree.edges().iter().map(|(_, w)| w).sum();
        assert_eq!(weight, kruskal_weight(&g, &reach), "seed {seed}");
        for ((u, v), w) in tree.edges() {
            assert_eq!(g.weight(&u, &v), Some(w));
        }
    }
    assert!(disconnected > 0, "no disconnected sample graph");
}

#[test]
fn test_walk_counts_every_step() {
    let g = random_graph(5, 0.4);
    let mut rng = StdRng::seed_from_u64(5);
    let scores = approximate_centrality(&g, 20, 30, &mut rng).expect("non-empty graph");
    assert_eq!(scores.len(), N);
    let total: f64 = scores.values().sum();
    assert_eq!(total, 600.0);
}

#[test]
fn test_cycles_are_simple_and_closed() {
    for seed in 0..5 {
        let g = random_graph(seed, 0.5);
        for length in 2..6 {
            let cycle = bounded_cycle(&g, &0, length, None).expect("vertex 0 exists");
            if cycle.is_empty() {
                continue;
            }
            assert_eq!(cycle.len(), length);
            let mut tour = vec![0];
            tour.extend(cycle.iter().copied());
            tour.push(0);
            for pair in tour.windows(2) {
                assert!(g.is_adjacent(&pair[0], &pair[1]), "seed {seed}: {pair:?}");
            }
            let mut seen = cycle.clone();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), length);
            assert!(!cycle.contains(&0));
        }
    }
}

#[test]
fn test_quick_sort_agrees_with_std() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut items: Vec<(usize, f64)> = (0..2_000)
        .map(|i| (i, f64::from(rng.gen_range(0..50_u32))))
        .collect();
    let mut expected: Vec<f64> = items.iter().map(|(_, w)| *w).collect();
    expected.sort_by(f64::total_cmp);

    quick_sort(&mut items);
    let sorted: Vec<f64> = items.iter().map(|(_, w)| *w).collect();
    assert_eq!(sorted, expected);
}
