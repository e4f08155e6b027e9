pub mod cli;
pub mod combinatorics;
pub mod config;
pub mod history;
pub mod logging;
pub mod parallel;
pub mod simulation;
