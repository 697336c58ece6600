//! Character adjacency graph built from an idiom dictionary
//!
//! Each idiom contributes one directed edge from its first character to its
//! second character. The graph is built once and never mutated afterwards.

use rustc_hash::{FxHashMap, FxHashSet};

/// Directed graph mapping a character to the characters that can follow it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdiomGraph {
    edges: FxHashMap<char, FxHashSet<char>>,
}

impl IdiomGraph {
    /// Build a graph from dictionary lines
    ///
    /// Only the first two characters of each line are read. Lines shorter
    /// than two characters contribute nothing.
    ///
    /// # Examples
    /// ```
    /// use jukugo_chain::solver::IdiomGraph;
    ///
    /// let graph = IdiomGraph::from_lines(["天寒", "寒餅", "天気"]);
    /// assert!(graph.has_edge('天', '寒'));
    /// assert!(graph.has_edge('天', '気'));
    /// assert!(!graph.contains('餅'));
    /// ```
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().filter_map(leading_pair).collect()
    }

    /// Characters reachable in one idiom from `symbol`
    #[inline]
    #[must_use]
    pub fn neighbors(&self, symbol: char) -> Option<&FxHashSet<char>> {
        self.edges.get(&symbol)
    }

    /// Whether `symbol` has at least one outgoing edge
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.edges.contains_key(&symbol)
    }

    #[must_use]
    pub fn has_edge(&self, from: char, to: char) -> bool {
        self.neighbors(from).is_some_and(|next| next.contains(&to))
    }

    /// Number of characters with outgoing edges
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Total number of distinct edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(FxHashSet::len).sum()
    }
}

impl FromIterator<(char, char)> for IdiomGraph {
    fn from_iter<T: IntoIterator<Item = (char, char)>>(iter: T) -> Self {
        let edges = iter.into_iter().fold(
            FxHashMap::<char, FxHashSet<char>>::default(),
            |mut edges, (from, to)| {
                edges.entry(from).or_default().insert(to);
                edges
            },
        );

        Self { edges }
    }
}

fn leading_pair(line: &str) -> Option<(char, char)> {
    let mut chars = line.chars();
    Some((chars.next()?, chars.next()?))
}
