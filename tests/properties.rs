use std::collections::{HashMap, HashSet};

use convex_mwt::{triangulate, Builder, Float, Point, Points};
use proptest::prelude::*;

fn convex_polygon() -> impl Strategy<Value = Vec<Point>> {
    (
        prop::collection::vec(0.0f64..std::f64::consts::TAU, 0..28),
        1.0f64..500.,
        0.2f64..1.,
    )
        .prop_map(|(mut angles, radius, squash)| {
            angles.sort_by(|a, b| a.total_cmp(b));
            angles
                .into_iter()
                .map(|theta| {
                    Point::new(
                        (theta.cos() * radius) as Float,
                        (theta.sin() * radius * squash) as Float,
                    )
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn triangle_count_and_order(points in convex_polygon()) {
        let n = points.len();
        let result = triangulate(&points).unwrap();
        prop_assert_eq!(result.len(), n.saturating_sub(2));

        let mut spans = HashSet::new();
        for t in &result {
            let [i, k, j] = t.indices();
            prop_assert!(i < k && k < j);
            prop_assert!((j as usize) < n);
            prop_assert!(spans.insert((i, j)));
        }
        if n >= 3 {
            let root = result.triangles()[0].indices();
            prop_assert_eq!((root[0], root[2]), (0, n as u32 - 1));
        } else {
            prop_assert_eq!(result.cost(), 0.);
        }
    }

    #[test]
    fn boundary_edges_once_diagonals_twice(points in convex_polygon()) {
        let n = points.len();
        prop_assume!(n >= 3);
        let result = triangulate(&points).unwrap();

        let mut edges = HashMap::<(u32, u32), usize>::new();
        for t in &result {
            let [i, k, j] = t.indices();
            for edge in [(i, k), (k, j), (i, j)] {
                *edges.entry(edge).or_default() += 1;
            }
        }

        let last = n as u32 - 1;
        prop_assert_eq!(edges.len(), 2 * n - 3);
        for i in 0..last {
            prop_assert_eq!(edges.get(&(i, i + 1)).copied(), Some(1));
        }
        prop_assert_eq!(edges.get(&(0, last)).copied(), Some(1));
        for (&(i, j), &count) in &edges {
            let boundary = j == i + 1 || (i, j) == (0, last);
            prop_assert_eq!(count, if boundary { 1 } else { 2 });
        }
    }

    #[test]
    fn cost_is_perimeter_sum(points in convex_polygon()) {
        let store = Points::new(points.clone()).unwrap();
        let result = triangulate(&points).unwrap();
        let perimeters = result
            .iter()
            .map(|t| t.perimeter(&store).unwrap())
            .sum::<Float>();
        let tolerance = 1e-3 * perimeters.max(1.);
        prop_assert!((result.cost() - perimeters).abs() <= tolerance);
    }

    #[test]
    fn chosen_split_never_undercuts_children(points in convex_polygon()) {
        let table = Builder::new(points).build().unwrap().solve();
        for ((i, j), cell) in table.iter() {
            prop_assert!(cell.cost >= 0.);
            if j - i >= 2 {
                let k = cell.apex.as_usize();
                prop_assert!(i < k && k < j);
                prop_assert!(cell.cost >= table.cell(i, k).cost + table.cell(k, j).cost);
            }
        }
    }

    #[test]
    fn thread_count_does_not_change_result(points in convex_polygon(), threads in 1usize..5) {
        let global = Builder::new(points.clone()).build().unwrap();
        let pooled = Builder::new(points).threads(threads).build().unwrap();
        prop_assert_eq!(global.solve(), pooled.solve());
        prop_assert_eq!(global.triangulate().unwrap(), pooled.triangulate().unwrap());
    }
}
