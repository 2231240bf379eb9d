pub mod controller;
pub mod page;
pub mod routes;
pub mod schema;

pub use routes::status_routes;
