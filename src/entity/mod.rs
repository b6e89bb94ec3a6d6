pub mod api_endpoint;
pub mod api_interface;
