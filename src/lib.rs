pub mod config;
pub mod error;
pub mod imaging;
pub mod normalize;
pub mod server;
pub mod vlm;

pub use error::{Error, Result};
