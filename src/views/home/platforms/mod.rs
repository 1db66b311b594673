// Platform-specific implementations
mod common;
#[cfg(feature = "web")]
mod web;

// Export platform-specific functions
#[cfg(not(feature = "web"))]
pub use common::submit_download_form;
#[cfg(feature = "web")]
pub use web::submit_download_form;

pub use common::sleep_ms;
