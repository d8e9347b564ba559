#[macro_use]
mod macros;

pub mod comparison;
pub mod datastructures;
pub mod graph;
pub mod io;
pub mod simulation;
pub mod stats;
pub mod trajectory;
pub mod validation;

#[cfg(feature = "logging")]
pub mod log;
#[cfg(feature = "handle-ctrlc")]
pub mod signals;
#[cfg(feature = "cli")]
pub mod timeout;

pub use comparison::{Outcome, StrategyComparison};
pub use graph::{BaseGraph, Edge, HashMapGraph, MutableGraph};
pub use simulation::{
    simulate, ComponentStrategy, ConnectivitySimulator, SimulationError, SimulationErrorKind,
};
pub use stats::{NetworkChange, NetworkInfo};
pub use trajectory::{first_drop_below, ConnectivityTrajectory};
pub use validation::{validate_attack_sequence, SequenceLength, ValidationError};
