/// Visual role of a node in the rendered subgraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStyle {
    /// Collapsed breadcrumb ancestor (dashed)
    Ancestor,
    /// The current center of the view (bold)
    Focal,
    /// Direct dependency or depender of the focal node
    Neighbor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    Solid,
    Dashed,
}

/// Arrowhead placement relative to the declared `source -> target` order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeDirection {
    Forward,
    Back,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDecl {
    pub id: String,
    pub label: Option<String>,
    pub style: NodeStyle,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDecl {
    pub source: String,
    pub target: String,
    pub style: EdgeStyle,
    pub direction: EdgeDirection,
}

/// Two-column package/version table rendered next to the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    pub entries: Vec<(String, String)>,
}

/// SubgraphDocument: the graph description handed to the layout engine
///
/// Declarations keep their emission order so the serialized text is
/// reproducible. The document is write-only output, discarded after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubgraphDocument {
    name: String,
    nodes: Vec<NodeDecl>,
    edges: Vec<EdgeDecl>,
    legend: Option<Legend>,
}

impl SubgraphDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
            legend: None,
        }
    }

    pub fn push_node(&mut self, node: NodeDecl) {
        self.nodes.push(node);
    }

    pub fn push_edge(&mut self, edge: EdgeDecl) {
        self.edges.push(edge);
    }

    pub fn set_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[NodeDecl] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeDecl] {
        &self.edges
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// All declarations of `id`, in emission order
    pub fn node_decls<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a NodeDecl> + 'a {
        self.nodes.iter().filter(move |node| node.id == id)
    }

    /// Nodes declared with the given style, in emission order
    pub fn nodes_with_style(&self, style: NodeStyle) -> Vec<&NodeDecl> {
        self.nodes.iter().filter(|node| node.style == style).collect()
    }

    /// Edges declared between `source` and `target`, in that order
    pub fn edges_between<'a>(
        &'a self,
        source: &'a str,
        target: &'a str,
    ) -> impl Iterator<Item = &'a EdgeDecl> + 'a {
        self.edges
            .iter()
            .filter(move |edge| edge.source == source && edge.target == target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, style: NodeStyle) -> NodeDecl {
        NodeDecl {
            id: id.to_string(),
            label: None,
            style,
            href: None,
        }
    }

    #[test]
    fn test_document_keeps_emission_order() {
        let mut document = SubgraphDocument::new("deps");
        document.push_node(node("b", NodeStyle::Focal));
        document.push_node(node("a", NodeStyle::Neighbor));

        let ids: Vec<&str> = document.nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(document.name(), "deps");
        assert!(document.legend().is_none());
    }

    #[test]
    fn test_lookup_helpers() {
        let mut document = SubgraphDocument::new("deps");
        document.push_node(node("a", NodeStyle::Ancestor));
        document.push_node(node("b", NodeStyle::Focal));
        document.push_edge(EdgeDecl {
            source: "a".to_string(),
            target: "b".to_string(),
            style: EdgeStyle::Dashed,
            direction: EdgeDirection::Forward,
        });

        assert_eq!(document.node_decls("a").count(), 1);
        assert_eq!(document.nodes_with_style(NodeStyle::Focal).len(), 1);
        assert_eq!(document.edges_between("a", "b").count(), 1);
        assert_eq!(document.edges_between("b", "a").count(), 0);
    }
}
