// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod health;
pub mod home;
pub mod trips;

pub use health::config as health_config;
pub use home::config as home_config;
pub use trips::config as trips_config;
