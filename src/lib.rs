pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod render;

pub use error::{AppError, Result};
