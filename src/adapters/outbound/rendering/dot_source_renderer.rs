use crate::application::dto::OutputFormat;
use crate::ports::outbound::RenderGateway;
use crate::shared::Result;
use async_trait::async_trait;

/// DotSourceRenderer adapter returning the graph description unchanged
///
/// Useful where no layout engine is installed, and for inspecting exactly what
/// the navigator would hand to one.
#[derive(Debug, Default)]
pub struct DotSourceRenderer;

impl DotSourceRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RenderGateway for DotSourceRenderer {
    async fn render(&self, document: &str) -> Result<Vec<u8>> {
        Ok(document.as_bytes().to_vec())
    }

    fn content_type(&self) -> &'static str {
        OutputFormat::Dot.content_type()
    }
}
