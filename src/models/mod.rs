pub mod api_endpoint;
pub mod api_interface;

pub use api_endpoint::*;
pub use api_interface::*;

/// Interfaces with more endpoints than this are "large"
pub const LARGE_INTERFACE_THRESHOLD: u64 = 5;
