mod client;
mod types;

pub use client::{ChatBackend, PlantCareClient};
pub use types::*;
