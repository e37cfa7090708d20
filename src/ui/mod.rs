#[cfg(feature = "ui")]
pub mod app;
#[cfg(feature = "ui")]
pub mod components;
pub mod format;
pub mod state;
