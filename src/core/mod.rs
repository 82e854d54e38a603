pub mod accumulator;
pub mod runner;
pub mod stats;
