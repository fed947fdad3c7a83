use crate::graph_navigation::domain::SubgraphDocument;
use crate::shared::Result;

/// DocumentFormatter port for serializing a projected subgraph
///
/// This port abstracts the text language understood by the layout engine
/// (Graphviz DOT, for instance).
pub trait DocumentFormatter: Send + Sync {
    /// Serializes the document
    ///
    /// # Errors
    /// Returns an error if the document cannot be expressed in the target language
    fn format(&self, document: &SubgraphDocument) -> Result<String>;
}
