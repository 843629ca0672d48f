pub mod app;
pub mod config;
pub mod error;
pub mod site;
pub mod stats;
pub mod util;
