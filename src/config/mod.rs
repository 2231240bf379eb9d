pub mod environment;
pub mod intervals;

pub use environment::{Config, ConfigError};
pub use intervals::{MonitorIntervals, SmtpSettings};
