//! Escape-route planning on 2D obstacle grids.
//!
//! This crate turns a square floor plan with rectangular obstacles into a
//! graph of traversable cells, derives two scalar fields over it, and runs
//! best-first searches toward the exits:
//!
//! - **Floor rasterization** ([`FloorPlan`]) — obstacle rectangles onto a
//!   free/blocked grid
//! - **Graph construction** ([`Graph`]) — dense node ids over free cells,
//!   4-way adjacency, per-node Manhattan distance to the nearest exit
//! - **Threat wavefront** ([`SafetyField`]) — multi-source BFS hop distance
//!   to the nearest threat
//! - **Best-first search** ([`escape_route`]) — generic over a [`CostModel`];
//!   instantiated as [`UniformCost`] (fewest hops) and [`SafetyAware`]
//!   (trades route length against threat exposure)
//!
//! All stages are synchronous, deterministic and allocation-scoped: a search
//! keeps its cost/predecessor scratch in per-call buffers, so independent
//! searches over one graph never interfere.
//!
//! # Pipeline
//!
//! | Stage | Input | Output |
//! |---|---|---|
//! | [`FloorPlan::new`] | size, obstacles | free/blocked grid |
//! | [`Graph::build`] | floor, exits | nodes, adjacency, `d_exit` |
//! | [`SafetyField::compute`] | graph, threats | per-node threat distance |
//! | [`escape_route`] | graph, cost model, start | route or no-route |
//!
//! [`plan_escape`] runs the whole pipeline in one call.

mod distance;
mod error;
mod floor;
mod graph;
mod plan;
mod policy;
mod safety;
mod search;

pub use distance::manhattan;
pub use error::Error;
pub use floor::FloorPlan;
pub use graph::{Graph, Node, NodeId};
pub use plan::{EscapePlan, plan_escape};
pub use policy::{SafetyAware, UniformCost};
pub use safety::SafetyField;
pub use search::{CostModel, Route, escape_route};
