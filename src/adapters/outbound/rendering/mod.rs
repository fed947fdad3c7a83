/// Render gateway adapters
mod dot_source_renderer;
mod graphviz_renderer;

pub use dot_source_renderer::DotSourceRenderer;
pub use graphviz_renderer::GraphvizRenderer;
