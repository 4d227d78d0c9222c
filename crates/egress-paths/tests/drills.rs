//! Whole-pipeline drills on two hand-built floor plans.
//!
//! Coordinates are (x, y) with x growing right and y growing down; an
//! obstacle `rect(x, y, w, h)` covers `w`×`h` cells from its top-left
//! corner.

use egress_core::{Point, Range};
use egress_paths::{EscapePlan, NodeId, plan_escape};

fn rect(x: i32, y: i32, w: i32, h: i32) -> Range {
    Range::new(x, y, x + w, y + h)
}

/// 9x9 drill: two exits on opposite sides, one threat in the top-right
/// corridor, start in the upper middle.
fn small_drill() -> EscapePlan {
    let obstacles = [
        rect(1, 1, 3, 1),
        rect(1, 1, 1, 4),
        rect(3, 3, 1, 2),
        rect(5, 1, 1, 4),
        rect(7, 1, 2, 1),
        rect(7, 4, 2, 1),
        rect(0, 6, 5, 1),
        rect(4, 6, 1, 2),
        rect(6, 6, 3, 1),
        rect(6, 8, 1, 1),
    ];
    let exits = [Point::new(8, 3), Point::new(0, 8)];
    let threats = [Point::new(6, 0)];
    plan_escape(9, &obstacles, &exits, &threats, Point::new(4, 1)).unwrap()
}

/// 13x13 drill: a larger floor with a sealed bottom block and two exits.
fn medium_drill() -> EscapePlan {
    let obstacles = [
        rect(1, 1, 1, 3),
        rect(3, 1, 3, 1),
        rect(6, 1, 1, 4),
        rect(8, 1, 1, 2),
        rect(10, 1, 2, 1),
        rect(11, 1, 1, 4),
        rect(3, 4, 4, 1),
        rect(8, 4, 4, 1),
        rect(0, 6, 3, 1),
        rect(4, 6, 1, 3),
        rect(6, 6, 1, 3),
        rect(8, 6, 4, 1),
        rect(11, 6, 1, 3),
        rect(0, 9, 13, 4),
    ];
    let exits = [Point::new(12, 5), Point::new(0, 8)];
    let threats = [Point::new(11, 0)];
    plan_escape(13, &obstacles, &exits, &threats, Point::new(9, 1)).unwrap()
}

/// Every route must start at the start node, end on an exit, and walk only
/// graph edges.
fn assert_walkable(plan: &EscapePlan, route: &[NodeId], start: Point) {
    assert_eq!(route.first(), Some(&plan.graph.id_at(start).unwrap()));
    let last = plan.graph.node(*route.last().unwrap()).unwrap();
    assert_eq!(last.d_exit, 0);
    assert!(plan.graph.exits().contains(&last.pos));
    for pair in route.windows(2) {
        let node = plan.graph.node(pair[0]).unwrap();
        assert!(
            node.neighbors.contains(&pair[1]),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn small_drill_node_count_and_fields() {
    let plan = small_drill();
    assert_eq!(plan.graph.len(), 55);
    // The threat cell itself has safety zero; the start sits three hops out.
    let threat_id = plan.graph.id_at(Point::new(6, 0)).unwrap();
    assert_eq!(plan.safety.get(threat_id), Some(0));
    let start_id = plan.graph.id_at(Point::new(4, 1)).unwrap();
    assert_eq!(plan.safety.get(start_id), Some(3));
}

#[test]
fn small_drill_fast_route_has_nine_nodes() {
    let plan = small_drill();
    let fast = plan.fast_route.clone().unwrap();
    assert_eq!(fast.len(), 9);
    assert_walkable(&plan, &fast, Point::new(4, 1));
}

#[test]
fn small_drill_safe_route_detours_around_the_threat() {
    let plan = small_drill();
    let safe = plan.safe_route.clone().unwrap();
    assert_walkable(&plan, &safe, Point::new(4, 1));
    // The detour trades five extra hops for distance from the threat.
    let want: Vec<NodeId> = [11, 16, 22, 28, 34, 35, 39, 44, 53, 52, 51, 50, 49, 48]
        .into_iter()
        .map(NodeId)
        .collect();
    assert_eq!(safe, want);

    // Wherever the two routes diverge, the safe route stays strictly
    // farther from the threat.
    let fast = plan.fast_route.clone().unwrap();
    for (s, f) in safe.iter().zip(fast.iter()) {
        if s != f {
            let safe_hops = plan.safety.get(*s).unwrap();
            let fast_hops = plan.safety.get(*f).unwrap();
            assert!(
                safe_hops > fast_hops,
                "safe route at {s} ({safe_hops} hops) not farther than fast route at {f} ({fast_hops} hops)"
            );
        }
    }
}

#[test]
fn medium_drill_routes() {
    let plan = medium_drill();
    assert_eq!(plan.graph.len(), 79);

    let fast = plan.fast_route.clone().unwrap();
    assert_walkable(&plan, &fast, Point::new(9, 1));
    let want: Vec<NodeId> = [17, 10, 11, 12, 13, 18, 27, 37, 42, 55]
        .into_iter()
        .map(NodeId)
        .collect();
    assert_eq!(fast, want);

    let safe = plan.safe_route.clone().unwrap();
    assert_walkable(&plan, &safe, Point::new(9, 1));
    assert_eq!(safe.len(), 17);
    // The safe route leaves through the far exit, away from the threat.
    let last = plan.graph.node(*safe.last().unwrap()).unwrap();
    assert_eq!(last.pos, Point::new(0, 8));
}

#[test]
fn routes_map_back_to_floor_coordinates() {
    let plan = small_drill();
    let fast = plan.fast_route.clone().unwrap();
    let points = plan.graph.route_points(&fast);
    assert_eq!(points.len(), fast.len());
    assert_eq!(points[0], Point::new(4, 1));
    for p in &points {
        assert!(plan.floor.is_free(*p));
    }
}
