//! Simulated backend collaborators.

mod auth_service;
mod code_delivery;

pub use auth_service::SimulatedAuthService;
pub use code_delivery::SimulatedCodeDelivery;
