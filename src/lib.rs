pub mod config;
pub mod modules;
pub mod services;

pub use config::settings::Settings;
pub use services::seeder::{replace_collection, SeedError};
