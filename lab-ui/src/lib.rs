pub mod app;
pub mod config;
pub mod csv_loader;
pub mod export;
pub mod logging;
pub mod state;
pub mod views;
