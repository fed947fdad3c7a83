use crate::shared::error::NavigatorError;
use std::collections::{BTreeMap, BTreeSet};

type Adjacency = BTreeMap<String, BTreeSet<String>>;

/// GraphIndex aggregate: an immutable snapshot of the dependency graph
///
/// Holds the forward adjacency (node -> direct dependencies), its dual reverse
/// adjacency (node -> direct dependers), and the best-effort version table keyed
/// by bare package name. Ordered collections give every query a stable,
/// lexicographic iteration order.
///
/// Instances are produced by [`GraphIndexBuilder`] and never mutated afterwards,
/// so a single snapshot can be shared across request handlers without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphIndex {
    forward: Adjacency,
    reverse: Adjacency,
    versions: BTreeMap<String, String>,
    default_root: String,
}

impl GraphIndex {
    /// Parses a complete edge list held in memory.
    ///
    /// # Errors
    /// Returns `NavigatorError::MalformedEdgeLine` for a line without a space, or
    /// `NavigatorError::EmptyEdgeList` when no edge was found.
    pub fn from_edge_list(
        edge_list: &str,
        source_description: &str,
    ) -> Result<Self, NavigatorError> {
        let mut builder = GraphIndexBuilder::new();
        for line in edge_list.lines() {
            builder.add_line(line)?;
        }
        builder.build(source_description)
    }

    /// The depender of the first parsed edge
    pub fn default_root(&self) -> &str {
        &self.default_root
    }

    /// Direct dependencies of `node`, in lexicographic order
    pub fn dependencies<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a str> + 'a {
        Self::neighbors(&self.forward, node)
    }

    /// Direct dependers of `node`, in lexicographic order
    pub fn dependers<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a str> + 'a {
        Self::neighbors(&self.reverse, node)
    }

    /// Whether `depender` directly depends on `dependency`
    pub fn depends_on(&self, depender: &str, dependency: &str) -> bool {
        self.forward
            .get(depender)
            .is_some_and(|deps| deps.contains(dependency))
    }

    /// Number of direct dependencies of `node`
    pub fn fan_out(&self, node: &str) -> usize {
        self.forward.get(node).map_or(0, BTreeSet::len)
    }

    /// Number of direct dependers of `node`
    pub fn fan_in(&self, node: &str) -> usize {
        self.reverse.get(node).map_or(0, BTreeSet::len)
    }

    /// Whether `node` appears as either endpoint of any edge
    pub fn contains(&self, node: &str) -> bool {
        self.forward.contains_key(node) || self.reverse.contains_key(node)
    }

    /// Last recorded version for a bare package name
    pub fn version_of(&self, package: &str) -> Option<&str> {
        self.versions.get(package).map(String::as_str)
    }

    pub fn versions(&self) -> &BTreeMap<String, String> {
        &self.versions
    }

    /// Number of distinct nodes seen on either side of an edge
    pub fn node_count(&self) -> usize {
        self.forward
            .keys()
            .chain(self.reverse.keys())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Number of distinct edges
    pub fn edge_count(&self) -> usize {
        self.forward.values().map(BTreeSet::len).sum()
    }

    fn neighbors<'a>(adjacency: &'a Adjacency, node: &str) -> impl Iterator<Item = &'a str> + 'a {
        adjacency
            .get(node)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }
}

/// Incremental builder for [`GraphIndex`]
///
/// Edge-list sources feed it one line at a time so that streaming readers can
/// stop at the first malformed line without buffering the whole input.
#[derive(Debug, Default)]
pub struct GraphIndexBuilder {
    forward: Adjacency,
    reverse: Adjacency,
    versions: BTreeMap<String, String>,
    default_root: Option<String>,
    lines_read: usize,
}

impl GraphIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one `<before> <after>` line and inserts the edge.
    ///
    /// The line is split on its first space. A trailing `\r` is stripped and
    /// empty lines are skipped.
    pub fn add_line(&mut self, line: &str) -> Result<(), NavigatorError> {
        self.lines_read += 1;

        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return Ok(());
        }

        let (before, after) =
            line.split_once(' ')
                .ok_or_else(|| NavigatorError::MalformedEdgeLine {
                    line_number: self.lines_read,
                    line: line.to_string(),
                })?;

        self.insert_edge(before, after);
        Ok(())
    }

    /// Inserts a `before -> after` edge, keeping both indices in step.
    ///
    /// Self-edges are stored as-is; repeated edges collapse into one.
    pub fn insert_edge(&mut self, before: &str, after: &str) {
        if self.default_root.is_none() {
            self.default_root = Some(before.to_string());
        }

        self.record_version(before);
        self.record_version(after);

        self.forward
            .entry(before.to_string())
            .or_default()
            .insert(after.to_string());
        self.reverse
            .entry(after.to_string())
            .or_default()
            .insert(before.to_string());
    }

    /// Lines consumed so far, including skipped blank ones
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Freezes the builder into an immutable snapshot.
    ///
    /// # Errors
    /// Returns `NavigatorError::EmptyEdgeList` if no edge was inserted.
    pub fn build(self, source_description: &str) -> Result<GraphIndex, NavigatorError> {
        let default_root = self
            .default_root
            .ok_or_else(|| NavigatorError::EmptyEdgeList {
                source_description: source_description.to_string(),
            })?;

        Ok(GraphIndex {
            forward: self.forward,
            reverse: self.reverse,
            versions: self.versions,
            default_root,
        })
    }

    // Last write wins when a bare name recurs with another version.
    fn record_version(&mut self, token: &str) {
        if let Some((package, version)) = token.split_once('@') {
            self.versions
                .insert(package.to_string(), version.to_string());
        }
    }
}
