pub mod aggregates;
pub mod stats;
pub mod temperature;
