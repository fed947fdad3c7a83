use crate::graph_navigation::domain::{
    Breadcrumb, EdgeDecl, EdgeDirection, EdgeStyle, GraphIndex, Legend, NodeDecl, NodeStyle,
    SubgraphDocument,
};

/// Name of the emitted digraph
pub const DOCUMENT_NAME: &str = "deps";

/// Display toggles for the projected subgraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Append each neighbor's own dependency count to its label
    pub show_fan_out: bool,
    /// Emit a legend of every recorded package version
    pub show_legend: bool,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            show_fan_out: true,
            show_legend: false,
        }
    }
}

/// SubgraphProjector service selecting what to display for a breadcrumb
///
/// Pure business logic: given a graph snapshot and a breadcrumb it returns the
/// document for the focal node's neighborhood plus the collapsed ancestor chain.
/// Neighbors are visited in the graph's lexicographic order, so equal inputs
/// always produce identical documents.
pub struct SubgraphProjector;

impl SubgraphProjector {
    /// Projects the subgraph for `breadcrumb`.
    ///
    /// Emission order:
    /// 1. each ancestor (dashed, linking back to its truncated breadcrumb) with a
    ///    dashed edge to the next element, arrow reversed when only the dependency
    ///    runs the other way
    /// 2. the focal node (bold)
    /// 3. direct dependencies with solid `focus -> dependency` edges
    /// 4. direct dependers, minus the breadcrumb predecessor, with solid
    ///    `depender -> focus` edges
    /// 5. the optional legend
    ///
    /// A focal node unknown to the graph yields a bold node with no neighbors.
    /// A self-edge on the focal node yields a single `focus -> focus` edge.
    pub fn project(
        index: &GraphIndex,
        breadcrumb: &Breadcrumb,
        options: ProjectionOptions,
    ) -> SubgraphDocument {
        let mut document = SubgraphDocument::new(DOCUMENT_NAME);
        let path = breadcrumb.nodes();

        for (i, ancestor) in breadcrumb.ancestors().iter().enumerate() {
            let (ancestor, next) = (ancestor.as_str(), path[i + 1].as_str());

            document.push_node(NodeDecl {
                id: ancestor.to_string(),
                label: None,
                style: NodeStyle::Ancestor,
                href: Some(breadcrumb.truncated(i).to_href()),
            });

            let direction = if index.depends_on(ancestor, next) {
                EdgeDirection::Forward
            } else {
                EdgeDirection::Back
            };
            document.push_edge(EdgeDecl {
                source: ancestor.to_string(),
                target: next.to_string(),
                style: EdgeStyle::Dashed,
                direction,
            });
        }

        let focus = breadcrumb.focus();
        document.push_node(NodeDecl {
            id: focus.to_string(),
            label: None,
            style: NodeStyle::Focal,
            href: None,
        });

        for dependency in index.dependencies(focus) {
            // A self-edge is drawn once and the focal node is not redeclared.
            if dependency != focus {
                document.push_node(Self::neighbor(index, breadcrumb, dependency, options));
            }
            document.push_edge(Self::solid_edge(focus, dependency));
        }

        let predecessor = breadcrumb.predecessor();
        for depender in index
            .dependers(focus)
            .filter(|depender| *depender != focus && Some(*depender) != predecessor)
        {
            document.push_node(Self::neighbor(index, breadcrumb, depender, options));
            document.push_edge(Self::solid_edge(depender, focus));
        }

        if options.show_legend {
            if let Some(legend) = Self::legend(index) {
                document.set_legend(legend);
            }
        }

        document
    }

    fn neighbor(
        index: &GraphIndex,
        breadcrumb: &Breadcrumb,
        node: &str,
        options: ProjectionOptions,
    ) -> NodeDecl {
        let fan_out = index.fan_out(node);
        let label = if options.show_fan_out && fan_out > 0 {
            format!("{} ({})", node, fan_out)
        } else {
            node.to_string()
        };

        NodeDecl {
            id: node.to_string(),
            label: Some(label),
            style: NodeStyle::Neighbor,
            href: Some(breadcrumb.extended(node).to_href()),
        }
    }

    fn solid_edge(source: &str, target: &str) -> EdgeDecl {
        EdgeDecl {
            source: source.to_string(),
            target: target.to_string(),
            style: EdgeStyle::Solid,
            direction: EdgeDirection::Forward,
        }
    }

    /// Every bare package recorded in the graph with its version, sorted by name
    fn legend(index: &GraphIndex) -> Option<Legend> {
        if index.versions().is_empty() {
            return None;
        }

        Some(Legend {
            entries: index
                .versions()
                .iter()
                .map(|(package, version)| (package.clone(), version.clone()))
                .collect(),
        })
    }
}
