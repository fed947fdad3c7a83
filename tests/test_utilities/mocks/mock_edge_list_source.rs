use async_trait::async_trait;
use depgraph_nav::prelude::*;

/// Mock EdgeListSource serving an in-memory edge list
pub struct MockEdgeListSource {
    edge_list: String,
    should_fail: bool,
}

impl MockEdgeListSource {
    pub fn new(edge_list: impl Into<String>) -> Self {
        Self {
            edge_list: edge_list.into(),
            should_fail: false,
        }
    }

    /// A source whose producer always fails
    pub fn failing() -> Self {
        Self {
            edge_list: String::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl EdgeListSource for MockEdgeListSource {
    async fn load(&self) -> Result<GraphIndex> {
        if self.should_fail {
            return Err(NavigatorError::EdgeSourceFailed {
                source_description: self.describe(),
                causes: vec!["mock producer exited with status 1".to_string()],
            }
            .into());
        }
        Ok(GraphIndex::from_edge_list(&self.edge_list, &self.describe())?)
    }

    fn describe(&self) -> String {
        "mock edge list".to_string()
    }
}
