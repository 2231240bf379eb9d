pub mod alerts;
pub mod clock;
pub mod engine;
pub mod state;

pub use alerts::{Alert, AlertKind};
pub use clock::{Clock, SystemClock};
pub use engine::{MonitorEngine, MonitorTarget, NotificationAttempt, TickReport};
pub use state::{Availability, MonitorState, Transition};
