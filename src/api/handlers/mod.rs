pub mod bfhl;
pub mod health;
pub mod metrics;
