pub mod draw;
pub mod engine;
pub mod rng;

pub use draw::{classify_ticket, Draw, DrawMachine};
pub use engine::{simulate, SimulationConfig, SimulationReport, TierObservation, SIMULATION_BATCHES};
pub use rng::{entropy_seed, Rng};
