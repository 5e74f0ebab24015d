use cbp::entities::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

/// Configuration for the simulation driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct SimConfig {
    /// Capacity of every container opened during a trial
    pub capacity: usize,
    /// Seed for the PRNG. If undefined, the simulator will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            prng_seed: None,
        }
    }
}
