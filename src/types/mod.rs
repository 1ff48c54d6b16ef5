pub mod dataset;
pub mod frames;
pub mod records;
pub mod season;
pub mod temperature_category;
