use crate::graph_navigation::domain::{
    EdgeDecl, EdgeDirection, EdgeStyle, Legend, NodeDecl, NodeStyle, SubgraphDocument,
};
use crate::ports::outbound::DocumentFormatter;
use crate::shared::Result;
use std::fmt::Write;

const LEGEND_NODE_ID: &str = "__legend__";

/// DotFormatter adapter serializing a SubgraphDocument as Graphviz DOT
///
/// Output is laid out left to right. Every identifier and attribute value is
/// double-quoted, so node names containing `/`, `@` or spaces need no special
/// treatment.
#[derive(Debug, Default)]
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_node(out: &mut String, node: &NodeDecl) -> std::fmt::Result {
        let mut attributes = Vec::new();
        if let Some(href) = &node.href {
            attributes.push(format!("href={}", quote(href)));
        }
        match node.style {
            NodeStyle::Ancestor => attributes.push("style=dashed".to_string()),
            NodeStyle::Focal => attributes.push("style=bold".to_string()),
            NodeStyle::Neighbor => {}
        }
        if let Some(label) = &node.label {
            attributes.push(format!("label={}", quote(label)));
        }

        write!(out, "\t{}", quote(&node.id))?;
        if !attributes.is_empty() {
            write!(out, " [{}]", attributes.join(", "))?;
        }
        writeln!(out, ";")
    }

    fn write_edge(out: &mut String, edge: &EdgeDecl) -> std::fmt::Result {
        let mut attributes = Vec::new();
        if edge.style == EdgeStyle::Dashed {
            attributes.push("style=dashed");
        }
        if edge.direction == EdgeDirection::Back {
            attributes.push("dir=back");
        }

        write!(out, "\t{} -> {}", quote(&edge.source), quote(&edge.target))?;
        if !attributes.is_empty() {
            write!(out, " [{}]", attributes.join(", "))?;
        }
        writeln!(out, ";")
    }

    fn write_legend(out: &mut String, legend: &Legend) -> std::fmt::Result {
        let rows: Vec<String> = std::iter::once(("package", "version"))
            .chain(
                legend
                    .entries
                    .iter()
                    .map(|(package, version)| (package.as_str(), version.as_str())),
            )
            .map(|(package, version)| {
                format!("{{{}|{}}}", escape_record(package), escape_record(version))
            })
            .collect();

        writeln!(
            out,
            "\t{} [shape=record, label={}];",
            quote(LEGEND_NODE_ID),
            quote(&rows.join("|"))
        )
    }
}

impl DocumentFormatter for DotFormatter {
    fn format(&self, document: &SubgraphDocument) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "digraph {} {{", quote(document.name()))?;
        writeln!(out, "\trankdir=LR;")?;

        // Nodes first, then edges, each in emission order.
        for node in document.nodes() {
            Self::write_node(&mut out, node)?;
        }
        for edge in document.edges() {
            Self::write_edge(&mut out, edge)?;
        }
        if let Some(legend) = document.legend() {
            Self::write_legend(&mut out, legend)?;
        }

        writeln!(out, "}}")?;
        Ok(out)
    }
}

/// Double-quotes a DOT identifier or attribute value
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Escapes characters that carry structure inside a record label
fn escape_record(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '{' | '}' | '|' | '<' | '>' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
