//! Converts variable frame times into fixed simulation ticks

use serde::{Deserialize, Serialize};

use super::state::ChaseState;
use super::tick::tick;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixedStepper {
    accumulator: f32,
}

impl FixedStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame's elapsed time and run the ticks it pays for.
    ///
    /// Returns the number of ticks run. Time beyond `MAX_SUBSTEPS` ticks is
    /// dropped rather than carried into the next frame.
    pub fn advance(&mut self, state: &mut ChaseState, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::debug!("Dropping {:.4}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Fraction of a tick waiting in the accumulator (for render interpolation)
    pub fn alpha(&self) -> f32 {
        self.accumulator / SIM_DT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut state = ChaseState::new(1, &Settings::default());
        let mut stepper = FixedStepper::new();

        assert_eq!(stepper.advance(&mut state, SIM_DT * 0.6), 0);
        assert_eq!(stepper.advance(&mut state, SIM_DT * 0.6), 1);
        assert_eq!(state.time_ticks, 1);
        assert!(stepper.alpha() > 0.1 && stepper.alpha() < 0.3);
    }

    #[test]
    fn test_long_frame_capped() {
        let mut state = ChaseState::new(1, &Settings::default());
        let mut stepper = FixedStepper::new();

        // A 5 second hitch is clamped to MAX_FRAME_DT, which still pays for
        // more ticks than one frame may run
        assert!(MAX_FRAME_DT / SIM_DT > (MAX_SUBSTEPS + 1) as f32);
        let ticks = stepper.advance(&mut state, 5.0);
        assert_eq!(ticks, MAX_SUBSTEPS);
        assert_eq!(state.time_ticks, MAX_SUBSTEPS as u64);

        // The leftover backlog is dropped, not carried over
        assert_eq!(stepper.alpha(), 0.0);
        assert_eq!(stepper.advance(&mut state, 0.0), 0);
    }

    #[test]
    fn test_negative_frame_ignored() {
        let mut state = ChaseState::new(1, &Settings::default());
        let mut stepper = FixedStepper::new();
        assert_eq!(stepper.advance(&mut state, -1.0), 0);
        assert_eq!(stepper.alpha(), 0.0);
    }
}
