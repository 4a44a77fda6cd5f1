pub mod config;
pub mod error;
pub mod remote;
pub mod transfer;

pub use error::{Error, Result};
