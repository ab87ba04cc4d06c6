// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod climate;
pub mod cost_estimator;
pub mod nominatim_client;
pub mod trip_service;
pub mod visit_planner;
pub mod wikipedia_client;

#[cfg(test)]
pub mod testing;

pub use climate::*;
pub use cost_estimator::*;
pub use nominatim_client::*;
pub use trip_service::*;
pub use visit_planner::*;
pub use wikipedia_client::*;
