//! Conflict graph and greedy vertex coloring.
//!
//! Vertices are activity IDs; an undirected edge joins two activities iff
//! they overlap. The graph is built per call and dropped afterwards.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a
//! graph and its application to timetabling problems"

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{overlaps, Activity, ActivityId};

/// Adjacency-list conflict graph.
///
/// Undirected, no self-loops: `has_edge(a, b)` iff `overlaps(a, b)`.
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    adjacency: HashMap<ActivityId, Vec<ActivityId>>,
    /// Vertex IDs in input order.
    order: Vec<ActivityId>,
}

impl ConflictGraph {
    /// Builds the graph with an O(n²) pairwise scan.
    pub fn build(activities: &[Activity]) -> Self {
        let mut adjacency: HashMap<ActivityId, Vec<ActivityId>> =
            activities.iter().map(|a| (a.id, Vec::new())).collect();

        for (i, a) in activities.iter().enumerate() {
            for b in &activities[i + 1..] {
                if overlaps(a, b) {
                    adjacency.entry(a.id).or_default().push(b.id);
                    adjacency.entry(b.id).or_default().push(a.id);
                }
            }
        }

        Self {
            adjacency,
            order: activities.iter().map(|a| a.id).collect(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Activities that conflict with `id` (empty for unknown IDs).
    pub fn neighbors(&self, id: ActivityId) -> &[ActivityId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of conflicts of `id`.
    pub fn degree(&self, id: ActivityId) -> usize {
        self.neighbors(id).len()
    }

    /// Whether `a` and `b` conflict.
    pub fn has_edge(&self, a: ActivityId, b: ActivityId) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Vertex IDs in input order.
    pub fn vertices(&self) -> &[ActivityId] {
        &self.order
    }

    /// Greedy coloring in the given vertex order.
    ///
    /// Each vertex receives the smallest color not used by an already
    /// colored neighbor. Colors are dense, starting at 0.
    pub fn color(&self, order: ColoringOrder) -> Coloring {
        let sequence = match order {
            ColoringOrder::InputOrder => self.order.clone(),
            ColoringOrder::WelshPowell => {
                let mut by_degree = self.order.clone();
                // Stable: equal degrees keep input order.
                by_degree.sort_by_key(|&id| std::cmp::Reverse(self.degree(id)));
                by_degree
            }
        };

        let mut colors: HashMap<ActivityId, usize> = HashMap::with_capacity(sequence.len());
        for id in sequence {
            let used: HashSet<usize> = self
                .neighbors(id)
                .iter()
                .filter_map(|n| colors.get(n).copied())
                .collect();
            let color = (0..).find(|c| !used.contains(c)).unwrap_or(0);
            colors.insert(id, color);
        }

        Coloring { colors }
    }
}

/// Vertex visiting order for greedy coloring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColoringOrder {
    /// Color activities in the order given.
    #[default]
    InputOrder,
    /// Color by degree descending (ties keep input order).
    WelshPowell,
}

/// A proper coloring of a conflict graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coloring {
    colors: HashMap<ActivityId, usize>,
}

impl Coloring {
    /// Color of `id`, if colored.
    pub fn color_of(&self, id: ActivityId) -> Option<usize> {
        self.colors.get(&id).copied()
    }

    /// Number of distinct colors (max color + 1).
    pub fn color_count(&self) -> usize {
        self.colors.values().max().map_or(0, |&c| c + 1)
    }

    /// Activity IDs grouped by color, in increasing color order.
    pub fn groups(&self) -> BTreeMap<usize, Vec<ActivityId>> {
        let mut groups: BTreeMap<usize, Vec<ActivityId>> = BTreeMap::new();
        for (&id, &color) in &self.colors {
            groups.entry(color).or_default().push(id);
        }
        for ids in groups.values_mut() {
            ids.sort_unstable();
        }
        groups
    }

    /// Whether no edge of `graph` joins two vertices of the same color.
    pub fn is_proper(&self, graph: &ConflictGraph) -> bool {
        graph.vertices().iter().all(|&v| {
            graph
                .neighbors(v)
                .iter()
                .all(|&n| self.color_of(v) != self.color_of(n))
        })
    }
}
