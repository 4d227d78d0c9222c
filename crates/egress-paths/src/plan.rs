//! One-call planning facade: floor to routes in dependency order.

use egress_core::{Point, Range};

use crate::error::Error;
use crate::floor::FloorPlan;
use crate::graph::Graph;
use crate::policy::{SafetyAware, UniformCost};
use crate::safety::SafetyField;
use crate::search::{Route, escape_route};

/// The fully annotated result of one planning run: the floor, the graph
/// with its exit field, the threat field, and both routes.
#[derive(Debug, Clone)]
pub struct EscapePlan {
    pub floor: FloorPlan,
    pub graph: Graph,
    pub safety: SafetyField,
    /// Fewest-hops route, or `None` if no exit is reachable.
    pub fast_route: Option<Route>,
    /// Threat-averse route, or `None` if no exit is reachable.
    pub safe_route: Option<Route>,
}

/// Run the whole pipeline: rasterize the floor, build the graph, propagate
/// the threat wavefront, then search with both cost models from `start`.
pub fn plan_escape(
    size: i32,
    obstacles: &[Range],
    exits: &[Point],
    threats: &[Point],
    start: Point,
) -> Result<EscapePlan, Error> {
    let floor = FloorPlan::new(size, obstacles)?;
    let graph = Graph::build(&floor, exits)?;
    let safety = SafetyField::compute(&graph, threats);
    let fast_route = escape_route(&graph, &UniformCost::new(&graph), start)?;
    let safe_route = escape_route(&graph, &SafetyAware::new(&graph, &safety), start)?;
    Ok(EscapePlan {
        floor,
        graph,
        safety,
        fast_route,
        safe_route,
    })
}
