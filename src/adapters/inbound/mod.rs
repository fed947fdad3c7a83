/// Inbound adapters (Driving adapters)
///
/// These adapters receive requests from the outside world and drive the
/// application through its inbound ports.
pub mod http;
