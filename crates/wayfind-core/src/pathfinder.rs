//! Breadth-first shortest path over point connections.

use std::collections::VecDeque;

use crate::graph::NavGraph;
use crate::model::PointId;

impl NavGraph {
    /// Shortest path by edge count from `start` to `end`, both inclusive.
    ///
    /// Every edge has unit cost. Among equally short paths the one discovered
    /// first wins, which follows the order connections were added to each
    /// point. Returns `None` when either id is unknown or no path exists;
    /// `find_path(x, x)` is `[x]` for any existing point.
    pub fn find_path(&self, start: &PointId, end: &PointId) -> Option<Vec<PointId>> {
        let start_idx = self.index_of(start)?;
        let end_idx = self.index_of(end)?;

        if start_idx == end_idx {
            return Some(vec![start.clone()]);
        }

        let count = self.point_count();
        let mut visited = vec![false; count];
        let mut parent: Vec<Option<usize>> = vec![None; count];
        let mut frontier = VecDeque::new();

        // Nodes are marked when enqueued, so each is expanded at most once.
        visited[start_idx] = true;
        frontier.push_back(start_idx);

        while let Some(current) = frontier.pop_front() {
            for neighbor in &self.point_at(current).connections {
                let Some(next) = self.index_of(neighbor) else {
                    continue;
                };
                if visited[next] {
                    continue;
                }
                visited[next] = true;
                parent[next] = Some(current);

                if next == end_idx {
                    return Some(self.unwind(parent, end_idx));
                }
                frontier.push_back(next);
            }
        }

        None
    }

    fn unwind(&self, parent: Vec<Option<usize>>, end_idx: usize) -> Vec<PointId> {
        let mut path = vec![self.point_at(end_idx).id.clone()];
        let mut cursor = end_idx;
        while let Some(prev) = parent[cursor] {
            path.push(self.point_at(prev).id.clone());
            cursor = prev;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use petgraph::algo::dijkstra;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::model::{FloorPlanId, NewFloorPlan, NewNavigationPoint};

    use super::*;

    fn floor(graph: &mut NavGraph) -> FloorPlanId {
        graph
            .add_floor_plan(NewFloorPlan::new("ground.png", 1000, 1000))
            .unwrap()
    }

    fn point(graph: &mut NavGraph, floor: &FloorPlanId, name: &str, x: f64, y: f64) -> PointId {
        graph
            .add_navigation_point(NewNavigationPoint::new(floor.clone(), x, y).with_name(name))
            .unwrap()
    }

    /// Length of the shortest simple path, found by enumerating all of them.
    fn brute_force_shortest(
        adjacency: &HashMap<usize, Vec<usize>>,
        start: usize,
        end: usize,
    ) -> Option<usize> {
        fn walk(
            adjacency: &HashMap<usize, Vec<usize>>,
            node: usize,
            end: usize,
            on_path: &mut Vec<usize>,
            best: &mut Option<usize>,
        ) {
            if node == end {
                let edges = on_path.len() - 1;
                *best = Some(best.map_or(edges, |b| b.min(edges)));
                return;
            }
            for &next in adjacency.get(&node).into_iter().flatten() {
                if on_path.contains(&next) {
                    continue;
                }
                on_path.push(next);
                walk(adjacency, next, end, on_path, best);
                on_path.pop();
            }
        }

        let mut best = None;
        walk(adjacency, start, end, &mut vec![start], &mut best);
        best
    }

    #[test]
    fn test_corridor_path() {
        let mut graph = NavGraph::new();
        let f = floor(&mut graph);
        let a = point(&mut graph, &f, "A", 0.0, 0.0);
        let b = point(&mut graph, &f, "B", 100.0, 0.0);
        let c = point(&mut graph, &f, "C", 100.0, 100.0);
        graph.connect_points(&a, &b);
        graph.connect_points(&b, &c);

        assert_eq!(graph.find_path(&a, &c), Some(vec![a.clone(), b.clone(), c.clone()]));
        assert_eq!(graph.find_path(&c, &a), Some(vec![c, b, a]));
    }

    #[test]
    fn test_trivial_path() {
        let mut graph = NavGraph::new();
        let f = floor(&mut graph);
        let a = point(&mut graph, &f, "A", 0.0, 0.0);

        assert_eq!(graph.find_path(&a, &a), Some(vec![a.clone()]));
    }

    #[test]
    fn test_disconnected_point_has_no_path() {
        let mut graph = NavGraph::new();
        let f = floor(&mut graph);
        let a = point(&mut graph, &f, "A", 0.0, 0.0);
        let b = point(&mut graph, &f, "B", 100.0, 0.0);
        let d = point(&mut graph, &f, "D", 500.0, 500.0);
        graph.connect_points(&a, &b);

        assert_eq!(graph.find_path(&a, &d), None);
    }

    #[test]
    fn test_unknown_ids_have_no_path() {
        let mut graph = NavGraph::new();
        let f = floor(&mut graph);
        let a = point(&mut graph, &f, "A", 0.0, 0.0);
        let ghost = PointId::from("ghost");

        assert_eq!(graph.find_path(&ghost, &a), None);
        assert_eq!(graph.find_path(&a, &ghost), None);
        assert_eq!(graph.find_path(&ghost, &ghost), None);
    }

    #[test]
    fn test_prefers_fewer_edges_over_insertion_order() {
        let mut graph = NavGraph::new();
        let f = floor(&mut graph);
        let a = point(&mut graph, &f, "A", 0.0, 0.0);
        let x = point(&mut graph, &f, "X", 10.0, 0.0);
        let y = point(&mut graph, &f, "Y", 20.0, 0.0);
        let z = point(&mut graph, &f, "Z", 30.0, 0.0);
        // Long detour is wired first.
        graph.connect_points(&a, &x);
        graph.connect_points(&x, &y);
        graph.connect_points(&y, &z);
        graph.connect_points(&a, &z);

        assert_eq!(graph.find_path(&a, &z), Some(vec![a, z]));
    }

    #[test]
    fn test_ties_follow_connection_order() {
        let mut graph = NavGraph::new();
        let f = floor(&mut graph);
        let a = point(&mut graph, &f, "A", 0.0, 0.0);
        let up = point(&mut graph, &f, "Up", 10.0, 0.0);
        let down = point(&mut graph, &f, "Down", 0.0, 10.0);
        let goal = point(&mut graph, &f, "Goal", 10.0, 10.0);
        graph.connect_points(&a, &down);
        graph.connect_points(&a, &up);
        graph.connect_points(&up, &goal);
        graph.connect_points(&down, &goal);

        assert_eq!(graph.find_path(&a, &goal), Some(vec![a, down, goal]));
    }

    #[test]
    fn test_path_after_disconnect() {
        let mut graph = NavGraph::new();
        let f = floor(&mut graph);
        let a = point(&mut graph, &f, "A", 0.0, 0.0);
        let b = point(&mut graph, &f, "B", 10.0, 0.0);
        graph.connect_points(&a, &b);
        graph.disconnect_points(&a, &b);

        assert_eq!(graph.find_path(&a, &b), None);
    }

    #[test]
    fn test_bfs_matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let mut graph = NavGraph::new();
            let f = floor(&mut graph);
            let n = rng.random_range(2..=8);
            let ids: Vec<PointId> = (0..n)
                .map(|i| point(&mut graph, &f, &format!("P{i}"), i as f64, 0.0))
                .collect();

            let mut adjacency: HashMap<usize, Vec<usize>> = HashMap::new();
            for i in 0..n {
                for j in (i + 1)..n {
                    if rng.random_bool(0.3) {
                        graph.connect_points(&ids[i], &ids[j]);
                        adjacency.entry(i).or_default().push(j);
                        adjacency.entry(j).or_default().push(i);
                    }
                }
            }

            let (pg, index) = graph.to_petgraph();
            for s in 0..n {
                for e in 0..n {
                    let found = graph.find_path(&ids[s], &ids[e]);
                    let expected = brute_force_shortest(&adjacency, s, e);
                    let distances = dijkstra(&pg, index[&ids[s]], Some(index[&ids[e]]), |_| 1usize);

                    match (found, expected) {
                        (Some(path), Some(edges)) => {
                            assert_eq!(path.len() - 1, edges);
                            assert_eq!(distances.get(&index[&ids[e]]), Some(&edges));
                            assert_eq!(path.first(), Some(&ids[s]));
                            assert_eq!(path.last(), Some(&ids[e]));
                            for pair in path.windows(2) {
                                let from = graph.get_navigation_point(&pair[0]).unwrap();
                                assert!(from.is_connected_to(&pair[1]));
                            }
                        }
                        (None, None) => {
                            assert!(!distances.contains_key(&index[&ids[e]]));
                        }
                        (found, expected) => {
                            panic!("bfs {found:?} disagrees with brute force {expected:?}")
                        }
                    }
                }
            }
        }
    }
}
