pub mod config;
pub mod simulation;

pub use config::{Config, ConfigError};
pub use simulation::{run_simulation, SimulationResults};
