/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod browser;
pub mod console;
pub mod edge_sources;
pub mod formatters;
pub mod rendering;
