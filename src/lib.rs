pub mod api;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;

pub use error::{Error, Result};
