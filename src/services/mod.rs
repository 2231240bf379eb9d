pub mod metrics;
pub mod monitor;
pub mod notify;
pub mod probe;
pub mod security;
pub mod status;
