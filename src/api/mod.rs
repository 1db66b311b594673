// Client side of the backend wire contract.
mod client;
mod error;
mod types;

pub use client::fetch_formats;
pub use error::ApiError;
pub use types::{FormatsRequest, VideoFormat};
