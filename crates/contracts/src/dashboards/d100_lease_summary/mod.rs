pub mod metrics;

pub use metrics::{lease_state, LeaseMetrics, LeaseState};
