use crate::adapters::outbound::rendering::{DotSourceRenderer, GraphvizRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::RenderGateway;

/// Factory for creating render gateways
///
/// `Dot` output needs no layout engine and returns the description itself;
/// every other format goes through the external engine.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a render gateway for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format
    /// * `program` - Layout-engine executable (e.g. `dot`)
    ///
    /// # Examples
    /// ```
    /// use depgraph_nav::application::dto::OutputFormat;
    /// use depgraph_nav::application::factories::RendererFactory;
    /// use depgraph_nav::ports::outbound::RenderGateway;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Svg, "dot");
    /// assert_eq!(renderer.content_type(), "image/svg+xml");
    /// ```
    pub fn create(format: OutputFormat, program: &str) -> Box<dyn RenderGateway> {
        match format {
            OutputFormat::Dot => Box::new(DotSourceRenderer::new()),
            OutputFormat::Svg | OutputFormat::Png => {
                Box::new(GraphvizRenderer::new(program, format))
            }
        }
    }

    /// Returns the startup message for the specified output format
    pub fn progress_message(format: OutputFormat, program: &str) -> String {
        match format {
            OutputFormat::Dot => "🖼  Serving raw DOT source (no layout engine)".to_string(),
            _ => format!("🖼  Rendering {} diagrams with `{}`", format, program),
        }
    }
}
