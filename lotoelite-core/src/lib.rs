pub mod models;
pub mod session;
pub mod provider;
pub mod trend;
pub mod filter;
pub mod score;
pub mod generator;
pub mod preset;
pub mod report;
