pub mod smtp;
pub mod types;

pub use smtp::SmtpNotifier;
pub use types::*;
