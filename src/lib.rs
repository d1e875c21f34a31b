pub mod config;
pub mod events;
pub mod infrastructure;
pub mod models;
pub mod services;

pub use config::*;
pub use events::*;
pub use models::*;
pub use services::*;
