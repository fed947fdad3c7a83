use async_trait::async_trait;
use depgraph_nav::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock RenderGateway that echoes the document and records every call
#[derive(Default, Clone)]
pub struct MockRenderer {
    pub documents: Arc<Mutex<Vec<String>>>,
    should_fail: bool,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer that always fails, as a crashing layout engine would
    pub fn failing() -> Self {
        Self {
            documents: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    pub fn get_documents(&self) -> Vec<String> {
        self.documents.lock().unwrap().clone()
    }
}

#[async_trait]
impl RenderGateway for MockRenderer {
    async fn render(&self, document: &str) -> Result<Vec<u8>> {
        self.documents.lock().unwrap().push(document.to_string());
        if self.should_fail {
            return Err(NavigatorError::RenderFailed {
                renderer: "mock".to_string(),
                details: "syntax error in line 1".to_string(),
            }
            .into());
        }
        Ok(format!("<svg>{}</svg>", document).into_bytes())
    }

    fn content_type(&self) -> &'static str {
        "image/svg+xml"
    }
}
