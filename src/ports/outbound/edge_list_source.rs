use crate::graph_navigation::domain::GraphIndex;
use crate::shared::Result;
use async_trait::async_trait;

/// EdgeListSource port for obtaining the dependency graph
///
/// This port abstracts where the raw `<before> <after>` edge list comes from:
/// a package manager command, a file, or stdin.
#[async_trait]
pub trait EdgeListSource: Send + Sync {
    /// Reads the complete edge list and builds the graph snapshot
    ///
    /// # Errors
    /// Returns an error if:
    /// - A line has no separating space
    /// - The edge list is empty
    /// - Reading fails or the producing command exits abnormally; when several
    ///   of these happen together every cause is reported
    async fn load(&self) -> Result<GraphIndex>;

    /// Human-readable description of the source, used in messages
    fn describe(&self) -> String;
}

#[async_trait]
impl EdgeListSource for Box<dyn EdgeListSource> {
    async fn load(&self) -> Result<GraphIndex> {
        (**self).load().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
