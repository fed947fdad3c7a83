/// Factories selecting infrastructure adapters from application settings
mod edge_source_factory;
mod renderer_factory;

pub use edge_source_factory::EdgeSourceFactory;
pub use renderer_factory::RendererFactory;
