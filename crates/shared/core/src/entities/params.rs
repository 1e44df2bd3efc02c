use serde::{Deserialize, Serialize};

/// One-time setup the harness sends before a simulation run starts.
///
/// The jump locations and probability describe how the harness generates the
/// underlying value series; the agent may use them as priors but is not
/// required to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of trading opportunities in the run
    pub timesteps: usize,
    /// Timesteps at which the underlying value may jump
    pub possible_jump_locations: Vec<usize>,
    /// Probability of an actual jump at each possible location
    pub single_jump_probability: f64,
}

impl SimulationParams {
    pub fn new(
        timesteps: usize,
        possible_jump_locations: Vec<usize>,
        single_jump_probability: f64,
    ) -> Self {
        Self {
            timesteps,
            possible_jump_locations,
            single_jump_probability,
        }
    }
}
