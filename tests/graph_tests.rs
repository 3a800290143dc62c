use std::collections::HashMap;

use algolab::graph::{AdjacencyMap, WeightedAdjacencyMap};
use algolab::{
    breadth_first_find, breadth_first_search, dijkstra_shortest_path, AlgoError, Bfs, ShortestPath,
};

#[test]
fn bfs_diamond_visits_each_node_once() {
    let graph: AdjacencyMap<&str> = HashMap::from([
        ("A", vec!["B", "C"]),
        ("B", vec!["D"]),
        ("C", vec!["D"]),
        ("D", vec![]),
    ]);

    let order = breadth_first_search(&graph, "A");
    assert_eq!(order.len(), 4);
    assert_eq!(order.first(), Some(&"A"));
    assert_eq!(order.last(), Some(&"D"));
    assert_eq!(order, ["A", "B", "C", "D"]);
}

#[test]
fn bfs_from_json_fixture() {
    let graph: AdjacencyMap<String> = serde_json::from_str(
        r#"{
            "you":    ["alice", "bob", "claire"],
            "bob":    ["anuj", "peggy"],
            "alice":  ["peggy"],
            "claire": ["thom", "jonny"],
            "anuj":   [],
            "peggy":  [],
            "thom":   [],
            "jonny":  []
        }"#,
    )
    .unwrap();

    let order = breadth_first_search(&graph, "you".to_string());
    assert_eq!(
        order,
        ["you", "alice", "bob", "claire", "peggy", "anuj", "thom", "jonny"]
    );

    let first_p = breadth_first_find(&graph, "you".to_string(), |n| n.starts_with('p'));
    assert_eq!(first_p.as_deref(), Some("peggy"));
}

#[test]
fn bfs_iterator_is_lazy() {
    let graph: AdjacencyMap<u32> = (0..1000).map(|i| (i, vec![i + 1])).collect();
    let first_three: Vec<u32> = Bfs::new(&graph, 0).take(3).collect();
    assert_eq!(first_three, [0, 1, 2]);
}

#[test]
fn shortest_path_detour() {
    let graph: WeightedAdjacencyMap<&str, u32> = HashMap::from([
        ("A", vec![("B", 1), ("C", 4)]),
        ("B", vec![("C", 1)]),
        ("C", vec![]),
    ]);

    let path = dijkstra_shortest_path(&graph, &"A", &"C").unwrap();
    assert_eq!(path.nodes, ["A", "B", "C"]);
    assert_eq!(path.cost, 2);
}

#[test]
fn shortest_path_from_json_fixture() {
    let graph: WeightedAdjacencyMap<String, f64> = serde_json::from_str(
        r#"{
            "start": [["a", 6.0], ["b", 2.0]],
            "a":     [["fin", 1.0]],
            "b":     [["a", 3.0], ["fin", 5.0]],
            "fin":   []
        }"#,
    )
    .unwrap();

    let path = dijkstra_shortest_path(&graph, &"start".to_string(), &"fin".to_string()).unwrap();
    assert_eq!(path.nodes, ["start", "b", "a", "fin"]);
    assert!((path.cost - 6.0).abs() < f64::EPSILON);

    let json = serde_json::to_string(&path).unwrap();
    let back: ShortestPath<String, f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, path);
}

#[test]
fn shortest_path_unreachable_and_invalid() {
    let graph: WeightedAdjacencyMap<u8, i32> = HashMap::from([(1, vec![(2, 7)]), (3, vec![])]);
    assert_eq!(
        dijkstra_shortest_path(&graph, &1, &3),
        Err(AlgoError::NoPathFound)
    );

    let negative: WeightedAdjacencyMap<u8, i32> = HashMap::from([(1, vec![(2, 7), (3, -2)])]);
    let err = dijkstra_shortest_path(&negative, &1, &3).unwrap_err();
    assert_eq!(
        err,
        AlgoError::NegativeWeight {
            node: "1".to_string(),
            neighbor_index: 1,
        }
    );
}
