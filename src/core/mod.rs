pub mod expense;
pub mod log;
pub mod metrics;
pub mod roi;
pub mod session;
pub mod stats;
