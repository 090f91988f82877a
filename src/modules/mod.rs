pub mod dashboard;
pub mod dataset;
pub mod training;
