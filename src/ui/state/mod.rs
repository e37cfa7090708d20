#[cfg(feature = "ui")]
pub mod app_state;
pub mod campaign_updates;
pub mod table_state;
pub mod toast;
