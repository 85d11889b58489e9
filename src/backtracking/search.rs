//! Branch-and-bound search over start-sorted activities.
//!
//! The search walks a binary decision tree (take / skip per activity) with
//! an explicit stack instead of recursion, so depth is bounded by heap
//! memory rather than the thread stack. All mutable search state lives in
//! [`SearchContext`].

use std::time::Instant;

use crate::models::Activity;

/// Node and wall-clock caps for one search.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SearchLimits {
    pub node_limit: Option<u64>,
    pub deadline: Option<Instant>,
}

/// Outcome of one search.
#[derive(Debug, Clone)]
pub(crate) struct SearchOutcome {
    /// Best selection found, chronological. `None` if no complete
    /// assignment satisfied the constraints.
    pub best: Option<Vec<Activity>>,
    /// Weight of `best` (0.0 when `None`).
    pub best_weight: f64,
    /// Visited decision nodes.
    pub nodes: u64,
    /// `false` when a limit stopped the search early.
    pub complete: bool,
}

enum Frame {
    Visit(State),
    /// Undo the most recent "take" once its subtree is exhausted.
    Untake,
}

#[derive(Clone, Copy)]
struct State {
    index: usize,
    weight: f64,
    last_end: Option<i64>,
    mandatory_taken: usize,
}

/// Search state shared by every node.
pub(crate) struct SearchContext<'a> {
    items: Vec<&'a Activity>,
    mandatory: Vec<bool>,
    mandatory_total: usize,
    /// `suffix_weight[i]` = sum of weights of `items[i..]`.
    suffix_weight: Vec<f64>,
    limits: SearchLimits,
    /// Indices (into `items`) of the current partial selection.
    chosen: Vec<usize>,
    best_weight: Option<f64>,
    best_picks: Vec<usize>,
    nodes: u64,
}

/// Wall-clock is polled once per this many nodes.
const CLOCK_POLL_INTERVAL: u64 = 1024;

impl<'a> SearchContext<'a> {
    /// Prepares a search over `items`; `is_mandatory` flags required ones.
    pub fn new(
        mut items: Vec<&'a Activity>,
        is_mandatory: impl Fn(&Activity) -> bool,
        limits: SearchLimits,
    ) -> Self {
        items.sort_by_key(|a| (a.start, a.end));

        let mandatory: Vec<bool> = items.iter().map(|a| is_mandatory(a)).collect();
        let mandatory_total = mandatory.iter().filter(|&&m| m).count();

        let mut suffix_weight = vec![0.0; items.len() + 1];
        for i in (0..items.len()).rev() {
            suffix_weight[i] = suffix_weight[i + 1] + items[i].weight;
        }

        Self {
            items,
            mandatory,
            mandatory_total,
            suffix_weight,
            limits,
            chosen: Vec::new(),
            best_weight: None,
            best_picks: Vec::new(),
            nodes: 0,
        }
    }

    /// Runs the search to completion or until a limit is hit.
    pub fn run(mut self) -> SearchOutcome {
        let n = self.items.len();
        let mut complete = true;
        let mut stack = vec![Frame::Visit(State {
            index: 0,
            weight: 0.0,
            last_end: None,
            mandatory_taken: 0,
        })];

        while let Some(frame) = stack.pop() {
            let state = match frame {
                Frame::Untake => {
                    self.chosen.pop();
                    continue;
                }
                Frame::Visit(state) => state,
            };

            self.nodes += 1;
            if self.limit_reached() {
                complete = false;
                break;
            }

            if state.index == n {
                self.offer(&state);
                continue;
            }

            // Bound: even taking every remaining activity cannot beat the incumbent.
            if let Some(best) = self.best_weight {
                if state.weight + self.suffix_weight[state.index] <= best {
                    continue;
                }
            }

            let i = state.index;
            let act = self.items[i];
            let is_mandatory = self.mandatory[i];

            // Pushed first, explored last.
            if !is_mandatory {
                stack.push(Frame::Visit(State {
                    index: i + 1,
                    ..state
                }));
            }

            if state.last_end.map_or(true, |end| act.start >= end) {
                self.chosen.push(i);
                stack.push(Frame::Untake);
                stack.push(Frame::Visit(State {
                    index: i + 1,
                    weight: state.weight + act.weight,
                    last_end: Some(act.end),
                    mandatory_taken: state.mandatory_taken + usize::from(is_mandatory),
                }));
            }
        }

        let best = self
            .best_weight
            .map(|_| self.best_picks.iter().map(|&i| self.items[i].clone()).collect());

        SearchOutcome {
            best,
            best_weight: self.best_weight.unwrap_or(0.0),
            nodes: self.nodes,
            complete,
        }
    }

    /// Records a complete assignment if it covers every mandatory activity
    /// and strictly improves the incumbent.
    fn offer(&mut self, state: &State) {
        if state.mandatory_taken != self.mandatory_total {
            return;
        }
        if self.best_weight.map_or(true, |best| state.weight > best) {
            self.best_weight = Some(state.weight);
            self.best_picks.clear();
            self.best_picks.extend_from_slice(&self.chosen);
        }
    }

    fn limit_reached(&self) -> bool {
        if let Some(limit) = self.limits.node_limit {
            if self.nodes > limit {
                return true;
            }
        }
        if let Some(deadline) = self.limits.deadline {
            if self.nodes % CLOCK_POLL_INTERVAL == 0 && Instant::now() >= deadline {
                return true;
            }
        }
        false
    }
}

/// Enumerates conflict-free subsets of start-sorted `items` (including the
/// empty one), stopping after `limit` subsets.
pub(crate) fn enumerate(mut items: Vec<&Activity>, limit: usize) -> Vec<Vec<Activity>> {
    items.sort_by_key(|a| (a.start, a.end));
    let n = items.len();
    let mut found = Vec::new();
    let mut chosen: Vec<usize> = Vec::new();
    // (index, last_end) or an untake marker.
    let mut stack: Vec<Option<(usize, Option<i64>)>> = vec![Some((0, None))];

    while let Some(frame) = stack.pop() {
        if found.len() >= limit {
            break;
        }
        let Some((index, last_end)) = frame else {
            chosen.pop();
            continue;
        };

        if index == n {
            found.push(chosen.iter().map(|&i| items[i].clone()).collect());
            continue;
        }

        stack.push(Some((index + 1, last_end)));
        let act = items[index];
        if last_end.map_or(true, |end| act.start >= end) {
            chosen.push(index);
            stack.push(None);
            stack.push(Some((index + 1, Some(act.end))));
        }
    }

    found
}
