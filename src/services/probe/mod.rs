pub mod http;
pub mod types;

pub use http::HttpProber;
pub use types::*;
