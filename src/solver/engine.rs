//! Shortest idiom chain search

use super::graph::IdiomGraph;
use crate::core::Idiom;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt;

/// A chain of characters where every consecutive pair is a graph edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<char>);

impl Path {
    /// Characters along the path, start first
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.0
    }

    /// Number of characters on the path
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a path holds at least the start and the end
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Idioms spelled by consecutive characters
    #[must_use]
    pub fn idioms(&self) -> Vec<Idiom> {
        self.0
            .windows(2)
            .map(|pair| Idiom::new(pair[0], pair[1]))
            .collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain: Vec<String> = self.idioms().iter().map(Idiom::to_string).collect();
        write!(f, "{}", chain.join(" → "))
    }
}

/// Find a shortest chain of idioms from `start` to `end`
///
/// Runs a breadth-first search whose frontier holds whole partial paths, so
/// the first path that reaches `end` has the fewest edges. Neighbors are
/// expanded in the graph's own iteration order. For a given build this order
/// is fixed, but it is hash order rather than codepoint order, so when
/// several shortest paths exist the one returned is deterministic without
/// being lexicographically smallest.
///
/// A character is marked visited the first time it is dequeued. It can still
/// sit in the frontier more than once if several paths reached it before
/// then; later copies are dropped without expansion. Neighbors with no
/// outgoing edges are pruned unless they are the target.
///
/// Returns `None` when `start` has no outgoing edges or `end` is unreachable.
///
/// # Examples
/// ```
/// use jukugo_chain::solver::{IdiomGraph, solve};
///
/// let graph = IdiomGraph::from_lines(["天寒", "寒餅"]);
/// let path = solve(&graph, '天', '餅').unwrap();
/// assert_eq!(path.symbols(), &['天', '寒', '餅']);
/// assert!(solve(&graph, '餅', '天').is_none());
/// ```
#[must_use]
pub fn solve(graph: &IdiomGraph, start: char, end: char) -> Option<Path> {
    let first_steps = graph.neighbors(start)?;

    let mut visited: FxHashSet<char> = FxHashSet::default();
    visited.insert(start);

    let mut frontier: VecDeque<Vec<char>> =
        first_steps.iter().map(|&next| vec![start, next]).collect();

    while let Some(path) = frontier.pop_front() {
        let Some(&current) = path.last() else {
            continue;
        };

        if current == end {
            return Some(Path(path));
        }

        if !visited.insert(current) {
            continue;
        }

        let Some(neighbors) = graph.neighbors(current) else {
            continue;
        };

        for &next in neighbors {
            if visited.contains(&next) || (next != end && !graph.contains(next)) {
                continue;
            }

            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(&path);
            extended.push(next);
            frontier.push_back(extended);
        }
    }

    None
}
