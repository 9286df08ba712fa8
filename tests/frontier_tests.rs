use fast_dijkstra::data_structures::PriorityFrontier;
use fast_dijkstra::Error;

#[test]
fn test_pop_min_orders_by_distance() {
    let mut frontier = PriorityFrontier::new(5);
    frontier.push(3, 7.0);
    frontier.push(1, 2.0);
    frontier.push(4, 5.0);
    frontier.push(0, 9.0);
    assert_eq!(frontier.len(), 4);
    assert_eq!(frontier.peek_min(), Some((1, 2.0)));

    let order: Vec<_> = std::iter::from_fn(|| frontier.try_pop_min()).collect();
    assert_eq!(order, vec![(1, 2.0), (4, 5.0), (3, 7.0), (0, 9.0)]);
    assert!(frontier.is_empty());
}

#[test]
fn test_ties_break_on_lower_vertex() {
    let mut frontier = PriorityFrontier::new(6);
    for vertex in [5, 2, 4, 0, 3] {
        frontier.push(vertex, 1.0);
    }
    let order: Vec<_> = std::iter::from_fn(|| frontier.try_pop_min()).map(|(v, _)| v).collect();
    assert_eq!(order, vec![0, 2, 3, 4, 5]);
}

#[test]
fn test_decrease_key_moves_vertex_forward() {
    let mut frontier = PriorityFrontier::new(4);
    frontier.push(0, 10.0);
    frontier.push(1, 5.0);
    frontier.push(2, 8.0);

    assert!(frontier.decrease_key(0, 1.0));
    assert_eq!(frontier.priority(0), Some(1.0));
    assert_eq!(frontier.pop_min().unwrap(), (0, 1.0));
    assert_eq!(frontier.pop_min().unwrap(), (1, 5.0));
}

#[test]
fn test_decrease_key_ignores_larger_or_equal_distance() {
    let mut frontier = PriorityFrontier::new(3);
    frontier.push(1, 4.0);

    assert!(!frontier.decrease_key(1, 4.0));
    assert!(!frontier.decrease_key(1, 6.0));
    assert_eq!(frontier.priority(1), Some(4.0));

    // Absent vertices are ignored as well
    assert!(!frontier.decrease_key(2, 1.0));
    assert!(!frontier.contains(2));
    assert_eq!(frontier.len(), 1);
}

#[test]
fn test_push_existing_vertex_keeps_single_entry() {
    let mut frontier = PriorityFrontier::new(3);
    frontier.push(2, 9.0);
    frontier.push(2, 3.0);
    frontier.push(2, 5.0);

    assert_eq!(frontier.len(), 1);
    assert_eq!(frontier.pop_min().unwrap(), (2, 3.0));
    assert!(frontier.is_empty());
}

#[test]
fn test_pop_min_on_empty_frontier_fails() {
    let mut frontier = PriorityFrontier::new(2);
    assert!(matches!(frontier.pop_min(), Err(Error::EmptyFrontier)));
    assert_eq!(frontier.try_pop_min(), None);
    assert_eq!(frontier.peek_min(), None);
}

#[test]
fn test_vertex_can_be_requeued_after_pop() {
    let mut frontier = PriorityFrontier::new(2);
    frontier.push(1, 2.0);
    assert_eq!(frontier.pop_min().unwrap(), (1, 2.0));
    assert!(!frontier.contains(1));

    frontier.push(1, 1.0);
    assert_eq!(frontier.priority(1), Some(1.0));
}

#[test]
fn test_clear_resets_positions() {
    let mut frontier = PriorityFrontier::new(4);
    frontier.push(0, 1.0);
    frontier.push(3, 2.0);
    frontier.clear();

    assert!(frontier.is_empty());
    assert!(!frontier.contains(0));
    assert!(!frontier.contains(3));
    frontier.push(3, 0.5);
    assert_eq!(frontier.pop_min().unwrap(), (3, 0.5));
}

#[test]
fn test_matches_sorted_order_under_mixed_operations() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let n = 200;
    let mut rng = StdRng::seed_from_u64(17);
    let mut frontier = PriorityFrontier::new(n);
    let mut best = vec![None::<f64>; n];

    for _ in 0..2000 {
        let vertex = rng.gen_range(0..n);
        let distance = rng.gen_range(0..1000) as f64;
        frontier.push(vertex, distance);
        best[vertex] = Some(best[vertex].map_or(distance, |d: f64| d.min(distance)));
    }

    let mut expected: Vec<(f64, usize)> = best
        .iter()
        .enumerate()
        .filter_map(|(v, d)| d.map(|d| (d, v)))
        .collect();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let popped: Vec<(f64, usize)> = std::iter::from_fn(|| frontier.try_pop_min())
        .map(|(v, d)| (d, v))
        .collect();
    assert_eq!(popped, expected);
}
