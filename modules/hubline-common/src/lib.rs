pub mod config;
pub mod error;
pub mod types;

pub use config::QueryConfig;
pub use error::{HublineError, StoreError};
pub use types::*;
