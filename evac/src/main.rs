//! Evac — escape-route drills rendered in the terminal.
//!
//! Runs a few hardcoded drill scenarios through the egress planning
//! pipeline and paints the annotated floor: obstacles, threats, exits and
//! both computed routes.

mod render;
mod scenario;

use std::time::Instant;

use egress_paths::{
    EscapePlan, FloorPlan, Graph, Route, SafetyAware, SafetyField, UniformCost, escape_route,
};

use scenario::Scenario;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    for sc in [
        scenario::small_drill(),
        scenario::medium_drill(),
        scenario::crowded_drill(),
    ] {
        run_drill(&sc)?;
    }
    Ok(())
}

fn run_drill(sc: &Scenario) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== {} ===", sc.name);

    let floor = FloorPlan::new(sc.size, &sc.obstacles)?;
    let graph = Graph::build(&floor, &sc.exits)?;
    println!("nodes: {}", graph.len());

    let started = Instant::now();
    let safety = SafetyField::compute(&graph, &sc.threats);
    println!("threat wavefront: {:?}", started.elapsed());

    let started = Instant::now();
    let fast_route = escape_route(&graph, &UniformCost::new(&graph), sc.start)?;
    println!("fast search: {:?}", started.elapsed());

    let started = Instant::now();
    let safe_route = escape_route(&graph, &SafetyAware::new(&graph, &safety), sc.start)?;
    println!("safe search: {:?}", started.elapsed());

    describe("fast route", &fast_route);
    describe("safe route", &safe_route);

    let plan = EscapePlan {
        floor,
        graph,
        safety,
        fast_route,
        safe_route,
    };
    render::draw(&plan, &sc.threats, sc.start);
    println!();
    Ok(())
}

fn describe(label: &str, route: &Option<Route>) {
    match route {
        Some(route) => {
            let ids: Vec<String> = route.iter().map(|id| id.0.to_string()).collect();
            println!("{label}: {} nodes [{}]", route.len(), ids.join(", "));
        }
        None => println!("{label}: no exit reachable"),
    }
}
