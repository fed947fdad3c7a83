use crate::shared::Result;
use async_trait::async_trait;

/// RenderGateway port for turning a graph description into a diagram
///
/// Implementations are called once per request with no retry. A failure must
/// only affect the request that triggered it.
#[async_trait]
pub trait RenderGateway: Send + Sync {
    /// Renders a serialized graph description
    ///
    /// # Arguments
    /// * `document` - The graph description in the layout engine's language
    ///
    /// # Returns
    /// The rendered diagram bytes
    ///
    /// # Errors
    /// Returns an error if the engine cannot be started, exits with a non-zero
    /// status, or the pipe to it breaks
    async fn render(&self, document: &str) -> Result<Vec<u8>>;

    /// MIME type of the bytes returned by `render`
    fn content_type(&self) -> &'static str;
}

#[async_trait]
impl RenderGateway for Box<dyn RenderGateway> {
    async fn render(&self, document: &str) -> Result<Vec<u8>> {
        (**self).render(document).await
    }

    fn content_type(&self) -> &'static str {
        (**self).content_type()
    }
}
