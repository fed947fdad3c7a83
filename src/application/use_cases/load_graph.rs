use crate::graph_navigation::domain::GraphIndex;
use crate::ports::outbound::{EdgeListSource, ProgressReporter};
use crate::shared::Result;

/// LoadGraphUseCase - builds the graph snapshot once at startup
///
/// # Type Parameters
/// * `S` - EdgeListSource implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadGraphUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> LoadGraphUseCase<S, PR>
where
    S: EdgeListSource,
    PR: ProgressReporter,
{
    /// Creates a new LoadGraphUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Reads the edge list and returns the immutable graph snapshot
    ///
    /// # Errors
    /// Propagates every construction failure from the source; no partial graph
    /// is returned.
    pub async fn execute(&self) -> Result<GraphIndex> {
        let description = self.source.describe();
        self.progress_reporter
            .begin(&format!("📖 Loading dependency graph from {}", description));

        let index = match self.source.load().await {
            Ok(index) => index,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ Failed to load dependency graph from {}", description));
                return Err(e);
            }
        };

        tracing::info!(
            source = %description,
            nodes = index.node_count(),
            edges = index.edge_count(),
            root = index.default_root(),
            "dependency graph loaded"
        );

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} node(s) and {} edge(s)",
            index.node_count(),
            index.edge_count()
        ));
        self.progress_reporter
            .report(&format!("   - Default root: {}", index.default_root()));
        if !index.versions().is_empty() {
            self.progress_reporter.report(&format!(
                "   - Versioned packages: {}",
                index.versions().len()
            ));
        }

        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::NavigatorError;
    use async_trait::async_trait;
    use std::cell::RefCell;

    struct StaticSource {
        edge_list: &'static str,
    }

    #[async_trait]
    impl EdgeListSource for StaticSource {
        async fn load(&self) -> Result<GraphIndex> {
            Ok(GraphIndex::from_edge_list(self.edge_list, "static")?)
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        messages: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
        fn begin(&self, message: &str) {
            self.messages.borrow_mut().push(format!("begin: {}", message));
        }
        fn report_error(&self, message: &str) {
            self.messages.borrow_mut().push(format!("error: {}", message));
        }
        fn report_completion(&self, message: &str) {
            self.messages.borrow_mut().push(format!("done: {}", message));
        }
    }

    #[tokio::test]
    async fn test_execute_loads_graph_and_reports() {
        let use_case = LoadGraphUseCase::new(
            StaticSource {
                edge_list: "A B\nB C@v1.0.0\n",
            },
            RecordingReporter::default(),
        );

        let index = use_case.execute().await.unwrap();
        assert_eq!(index.default_root(), "A");

        let messages = use_case.progress_reporter.messages.borrow();
        assert!(messages[0].starts_with("begin: "));
        assert!(messages.iter().any(|m| m.contains("3 node(s) and 2 edge(s)")));
        assert!(messages.iter().any(|m| m.contains("Default root: A")));
        assert!(messages.iter().any(|m| m.contains("Versioned packages: 1")));
    }

    #[tokio::test]
    async fn test_execute_propagates_failure() {
        let use_case = LoadGraphUseCase::new(
            StaticSource {
                edge_list: "broken\n",
            },
            RecordingReporter::default(),
        );

        let error = use_case.execute().await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<NavigatorError>(),
            Some(NavigatorError::MalformedEdgeLine { .. })
        ));

        let messages = use_case.progress_reporter.messages.borrow();
        assert!(messages.iter().any(|m| m.starts_with("error: ")));
    }
}
