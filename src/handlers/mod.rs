pub mod endpoint;
pub mod home;
pub mod interface;

pub use endpoint::{
    create_endpoint, delete_endpoint, get_endpoint, update_endpoint, EndpointRequest,
    EndpointResponse,
};
pub use home::{home, ServiceEndpoints, ServiceInfo};
pub use interface::{
    create_interface, delete_interface, get_interface, get_interface_by_name,
    list_interface_endpoints, list_interfaces, list_large_interfaces, update_interface,
    InterfaceRequest, InterfaceResponse,
};
