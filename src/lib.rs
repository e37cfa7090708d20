//! Campaign performance dashboard: a generic table view engine (search,
//! column filters, sort, pagination, CSV export) plus the dashboard that
//! drives it over a simulated marketing backend.

pub mod config;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod platform;
pub mod ui;
pub mod usecase;

#[cfg(test)]
mod tests;
