pub mod config;
pub mod error;
pub mod model;
pub mod prediction;
pub mod server;

pub use error::{Error, Result};
