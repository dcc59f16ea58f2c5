use stepwise_pathfinding::*;

fn grid_5x5() -> PathFinder {
    let grid = GridConfig::new(5, 5, Point::new(0, 0), Point::new(4, 4)).unwrap();
    PathFinder::new(grid, Heuristic::Manhattan)
}

/// Checks that the path runs from start to goal through free cells using legal moves.
fn assert_valid_path(path_finder: &PathFinder, path: &[Point]) {
    assert_eq!(path.first(), Some(&path_finder.start()));
    assert_eq!(path.last(), Some(&path_finder.goal()));
    for p in path {
        assert!(path_finder.config().can_move_to(p), "{} is blocked", p);
    }
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1], path_finder.allow_diagonal()),
            "{} -> {} is not a legal move",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn open_grid() {
    let mut path_finder = grid_5x5();
    assert_eq!(path_finder.run_to_completion(), SearchStatus::Succeeded);
    let snapshot = path_finder.snapshot();
    assert_valid_path(&path_finder, &snapshot.current_path);
    assert_eq!(snapshot.path_len(), 8);
    assert_eq!(snapshot.path_cost(), 8.0);
}

#[test]
fn wall_with_gap_on_last_row() {
    //  S.#..
    //  ..#..
    //  ..#..
    //  ..#..
    //  ....G
    let mut path_finder = grid_5x5();
    for y in 0..4 {
        path_finder.add_obstacle(Point::new(2, y)).unwrap();
    }
    assert_eq!(path_finder.run_to_completion(), SearchStatus::Succeeded);
    let snapshot = path_finder.snapshot();
    assert_valid_path(&path_finder, &snapshot.current_path);
    assert!(snapshot.current_path.contains(&Point::new(2, 4)));
    assert_eq!(snapshot.path_len(), 8);
}

#[test]
fn full_wall_fails() {
    let mut path_finder = grid_5x5();
    for x in 0..5 {
        path_finder.add_obstacle(Point::new(x, 2)).unwrap();
    }
    assert_eq!(path_finder.run_to_completion(), SearchStatus::Failed);
    let snapshot = path_finder.snapshot();
    assert!(snapshot.current_path.is_empty());
    let expected: PointSet = (0..5)
        .flat_map(|x| (0..2).map(move |y| Point::new(x, y)))
        .collect();
    assert_eq!(snapshot.seen_nodes, expected);
}

#[test]
fn diagonal_octile_open_grid() {
    let mut path_finder = grid_5x5();
    path_finder.set_diagonal_allowed(true);
    path_finder.set_heuristic(Heuristic::Octile);
    assert_eq!(path_finder.run_to_completion(), SearchStatus::Succeeded);
    let snapshot = path_finder.snapshot();
    assert_valid_path(&path_finder, &snapshot.current_path);
    assert_eq!(snapshot.path_len(), 4);
    assert!((snapshot.path_cost() - 4.0 * SQRT_2).abs() < 1e-9);
    // Octile is exact here, so only the diagonal gets expanded
    assert_eq!(snapshot.seen_nodes.len(), 5);
}

#[test]
fn snapshot_is_idempotent() {
    let mut path_finder = grid_5x5();
    path_finder.add_obstacle(Point::new(1, 1)).unwrap();
    path_finder.init();
    loop {
        let first = path_finder.snapshot();
        let second = path_finder.snapshot();
        assert_eq!(first, second);
        assert_eq!(first.current_path, second.current_path);
        if path_finder.step().is_terminal() {
            break;
        }
    }
}

#[test]
fn partial_path_tracks_the_frontier() {
    let mut path_finder = grid_5x5();
    path_finder.init();
    let mut previous_seen = 0;
    while path_finder.step() == SearchStatus::Running {
        let snapshot = path_finder.snapshot();
        assert_eq!(snapshot.seen_nodes.len(), previous_seen + 1);
        previous_seen = snapshot.seen_nodes.len();
        let frontier = snapshot.current_path.last().unwrap();
        assert!(snapshot.seen_nodes.contains(frontier));
        assert_eq!(snapshot.current_path.first(), Some(&Point::new(0, 0)));
        assert_eq!(snapshot.cell_kind(frontier) == CellKind::Path, *frontier != snapshot.start);
    }
}

#[test]
fn runs_are_reproducible() {
    let record = || {
        let mut path_finder = grid_5x5();
        path_finder.set_heuristic(Heuristic::Chebyshev);
        path_finder.add_obstacle(Point::new(3, 3)).unwrap();
        path_finder.add_obstacle(Point::new(1, 2)).unwrap();
        path_finder.init();
        let mut snapshots = vec![path_finder.snapshot()];
        while path_finder.step() == SearchStatus::Running {
            snapshots.push(path_finder.snapshot());
        }
        snapshots.push(path_finder.snapshot());
        snapshots
    };
    assert_eq!(record(), record());
}

#[test]
fn edits_between_runs_use_the_new_configuration() {
    let mut path_finder = grid_5x5();
    assert_eq!(path_finder.run_to_completion(), SearchStatus::Succeeded);
    path_finder.reinitialize();
    for x in 0..5 {
        path_finder.add_obstacle(Point::new(x, 2)).unwrap();
    }
    assert_eq!(path_finder.run_to_completion(), SearchStatus::Failed);
    path_finder.reinitialize();
    path_finder.remove_obstacle(&Point::new(0, 2));
    assert_eq!(path_finder.run_to_completion(), SearchStatus::Succeeded);
    let snapshot = path_finder.snapshot();
    assert_valid_path(&path_finder, &snapshot.current_path);
    assert!(snapshot.current_path.contains(&Point::new(0, 2)));
    for seen in &snapshot.seen_nodes {
        assert!(!path_finder.is_obstacle(seen));
    }
}

#[test]
fn edits_while_unstarted_need_no_reset() {
    let mut path_finder = grid_5x5();
    path_finder.add_obstacle(Point::new(1, 0)).unwrap();
    path_finder.set_start(Point::new(1, 0)).unwrap();
    path_finder.set_goal(Point::new(0, 0)).unwrap();
    assert_eq!(path_finder.status(), SearchStatus::Unstarted);
    assert_eq!(path_finder.run_to_completion(), SearchStatus::Succeeded);
    assert_eq!(
        path_finder.snapshot().current_path,
        vec![Point::new(1, 0), Point::new(0, 0)]
    );
}

#[test]
fn shrinking_keeps_a_consistent_grid() {
    let mut path_finder = grid_5x5();
    path_finder.add_obstacle(Point::new(4, 0)).unwrap();
    path_finder.add_obstacle(Point::new(1, 1)).unwrap();
    path_finder.set_size(3, 2).unwrap();
    assert_eq!(path_finder.size(), (3, 2));
    assert_eq!(path_finder.goal(), Point::new(2, 1));
    let snapshot = path_finder.snapshot();
    assert_eq!(snapshot.obstacles.len(), 1);
    assert!(snapshot.obstacles.contains(&Point::new(1, 1)));
    assert_eq!(path_finder.run_to_completion(), SearchStatus::Succeeded);
    assert_eq!(path_finder.snapshot().path_len(), 3);
}

#[test]
fn default_configuration() {
    let mut path_finder = PathFinder::default();
    assert_eq!(path_finder.size(), (30, 20));
    assert_eq!(path_finder.start(), Point::new(0, 0));
    assert_eq!(path_finder.goal(), Point::new(10, 10));
    assert_eq!(path_finder.heuristic(), Heuristic::Manhattan);
    assert!(!path_finder.allow_diagonal());
    assert_eq!(path_finder.run_to_completion(), SearchStatus::Succeeded);
    assert_eq!(path_finder.snapshot().path_len(), 20);
}

#[cfg(feature = "serde")]
#[test]
fn snapshot_serializes() {
    let mut path_finder = grid_5x5();
    path_finder.run_to_completion();
    let snapshot = path_finder.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}
