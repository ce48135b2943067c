pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod probe;

pub use error::{Error, Result};
