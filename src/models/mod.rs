pub mod actor;
pub mod metrics;
pub mod notification;
pub mod role;

pub use actor::*;
pub use metrics::*;
pub use notification::*;
pub use role::*;
