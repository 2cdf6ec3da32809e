pub mod cli;
pub mod core;
pub mod engine;
pub mod services;

pub use crate::core::{
    ExecutionMode, Item, PhaseOutcome, RunReport, SimulationError, SimulationReporter,
    SimulationResult,
};
pub use engine::{BoundedQueue, PopOutcome, RunCoordinator, SequentialSimulator};
pub use services::{ConsoleReporter, NoOpReporter, SimulationConfig};
