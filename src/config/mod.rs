pub mod content;
pub mod site_config;
