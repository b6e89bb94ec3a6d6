pub mod catalog;
pub mod endpoint;

pub use catalog::CatalogService;
pub use endpoint::EndpointService;
