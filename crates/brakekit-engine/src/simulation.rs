//! Bend animation driver.
//!
//! Tracks which bend is being formed and how far it has progressed. Time is
//! supplied by the caller through [`BendSimulator::advance`], so the same
//! simulator serves a UI timer and a test harness.

use brakekit_core::{BendConvention, BendPlan};
use tracing::debug;

use crate::aligner::{align_for_machine, AlignedFrame, BendPhase, FlipMode};
use crate::error::{EngineError, EngineResult};

/// Seconds needed to form one bend.
pub const DEFAULT_BEND_DURATION: f64 = 1.0;

/// Simulation state of the active bend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Idle,
    Running,
    Paused,
    Complete,
}

impl SimulationState {
    /// Returns the name of the state.
    pub fn name(&self) -> &'static str {
        match self {
            SimulationState::Idle => "Idle",
            SimulationState::Running => "Running",
            SimulationState::Paused => "Paused",
            SimulationState::Complete => "Complete",
        }
    }
}

/// Press-brake animation of one bend at a time.
pub struct BendSimulator {
    plan: BendPlan,
    convention: BendConvention,
    flip: FlipMode,
    active_bend: usize,
    progress: f64,
    duration: f64,
    state: SimulationState,
}

impl BendSimulator {
    /// Creates a simulator with the first bend selected.
    pub fn new(plan: BendPlan, convention: BendConvention) -> EngineResult<Self> {
        plan.validate()?;
        convention.validate()?;
        Ok(Self {
            plan,
            convention,
            flip: FlipMode::default(),
            active_bend: 0,
            progress: 0.0,
            duration: DEFAULT_BEND_DURATION,
            state: SimulationState::Idle,
        })
    }

    /// Sets the time one bend takes. Non-positive values are ignored.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        if seconds.is_finite() && seconds > 0.0 {
            self.duration = seconds;
        }
        self
    }

    pub fn with_flip(mut self, flip: FlipMode) -> Self {
        self.flip = flip;
        self
    }

    pub fn plan(&self) -> &BendPlan {
        &self.plan
    }

    /// Number of bends the plan forms.
    pub fn bend_count(&self) -> usize {
        self.plan
            .bend_step_indices(self.convention.trailing_angle)
            .len()
    }

    /// Selects the bend to animate and rewinds it to straight.
    pub fn select_bend(&mut self, index: usize) -> EngineResult<()> {
        let count = self.bend_count();
        if index >= count {
            return Err(EngineError::BendIndexOutOfRange { index, count });
        }
        self.active_bend = index;
        self.progress = 0.0;
        self.state = SimulationState::Idle;
        debug!("Selected bend {} of {}", index + 1, count);
        Ok(())
    }

    /// Starts forming the active bend from straight.
    pub fn start(&mut self) {
        if self.bend_count() == 0 {
            self.state = SimulationState::Complete;
            return;
        }
        self.progress = 0.0;
        self.state = SimulationState::Running;
    }

    pub fn pause(&mut self) {
        if self.state == SimulationState::Running {
            self.state = SimulationState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == SimulationState::Paused {
            self.state = SimulationState::Running;
        }
    }

    pub fn reset(&mut self) {
        self.state = SimulationState::Idle;
        self.progress = 0.0;
    }

    /// Moves the animation forward by `delta_seconds` while running.
    pub fn advance(&mut self, delta_seconds: f64) {
        let running = self.state == SimulationState::Running;
        if !running || delta_seconds.is_nan() || delta_seconds <= 0.0 {
            return;
        }
        self.progress = (self.progress + delta_seconds / self.duration).min(1.0);
        if self.progress >= 1.0 {
            self.state = SimulationState::Complete;
            debug!("Bend {} complete", self.active_bend + 1);
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn active_bend(&self) -> usize {
        self.active_bend
    }

    pub fn phase(&self) -> BendPhase {
        BendPhase::from_progress(self.progress)
    }

    /// Aligned geometry at the current progress.
    pub fn frame(&self) -> EngineResult<AlignedFrame> {
        self.frame_at(self.progress)
    }

    /// `count` frames of the active bend at evenly spaced progress values
    /// from 0.0 to 1.0 inclusive.
    pub fn frames(&self, count: usize) -> EngineResult<Vec<AlignedFrame>> {
        match count {
            0 => Ok(Vec::new()),
            1 => Ok(vec![self.frame_at(1.0)?]),
            _ => (0..count)
                .map(|i| self.frame_at(i as f64 / (count - 1) as f64))
                .collect(),
        }
    }

    fn frame_at(&self, progress: f64) -> EngineResult<AlignedFrame> {
        let count = self.bend_count();
        if self.active_bend >= count {
            return Err(EngineError::BendIndexOutOfRange {
                index: self.active_bend,
                count,
            });
        }
        align_for_machine(
            &self.plan,
            &self.convention,
            self.active_bend,
            progress,
            self.flip,
        )
    }
}
