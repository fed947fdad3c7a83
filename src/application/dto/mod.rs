/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod edge_source_spec;
mod navigation_request;
mod navigation_response;
mod output_format;

pub use edge_source_spec::EdgeSourceSpec;
pub use navigation_request::NavigationRequest;
pub use navigation_response::NavigationResponse;
pub use output_format::OutputFormat;
