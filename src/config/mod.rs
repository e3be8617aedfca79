// src/config/mod.rs

pub mod parameters;

pub use parameters::ConfigError;
pub use parameters::SimulationParameters;
