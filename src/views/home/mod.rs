mod handlers;
mod platforms;
mod ui;

// Re-export the main component
pub use ui::Home;
