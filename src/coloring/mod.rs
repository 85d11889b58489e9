//! Graph-coloring solver.
//!
//! Models activities as vertices of a conflict graph, colors the graph
//! greedily, and lays the color classes out on a single timeline. The
//! color count estimates how many parallel tracks (rooms, channels) the
//! original timing would need.
//!
//! # Submodules
//!
//! - `graph`: [`ConflictGraph`] construction and greedy [`Coloring`]
//! - `scheduler`: [`GraphColoringScheduler`] serialization onto one timeline

mod graph;
mod scheduler;

pub use graph::{Coloring, ColoringOrder, ConflictGraph};
pub use scheduler::{
    welsh_powell_color_count, ColoringConfig, GraphColoringScheduler, PLACEMENT_GAP,
};
