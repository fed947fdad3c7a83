/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define how external adapters (the HTTP server) drive the
/// application core.
pub mod navigation_port;

pub use navigation_port::{NavigationPort, SharedNavigator};
