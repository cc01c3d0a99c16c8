//! Fixed-timestep scheduling
//!
//! Real frame time is accumulated and drained in whole ticks; leftover
//! time carries to the next frame. Rendering reads the state once per
//! frame after all pending ticks have run, with no interpolation.

use serde::{Deserialize, Serialize};

use super::input::FrameInput;
use super::snapshot::Snapshot;

/// A simulation that advances in fixed ticks
pub trait Scene {
    type Input: FrameInput;

    fn tick(&mut self, input: &Self::Input, dt: f32);

    fn snapshot(&self) -> Snapshot;
}

/// Time accumulator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
    /// Optional cap on ticks per frame; excess time is dropped
    max_substeps: Option<u32>,
}

impl FixedStep {
    pub fn new(step: f32) -> Self {
        debug_assert!(step.is_finite() && step > 0.0, "step must be positive");
        Self {
            step,
            accumulator: 0.0,
            max_substeps: None,
        }
    }

    /// Limit ticks per frame to prevent a spiral of death after a stall
    pub fn with_max_substeps(mut self, max_substeps: u32) -> Self {
        self.max_substeps = Some(max_substeps);
        self
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Time carried over to the next frame
    #[inline]
    pub fn remainder(&self) -> f32 {
        self.accumulator
    }

    /// Add `frame_dt` seconds and call `tick` once per whole step.
    /// Returns the number of ticks run. A non-positive step never ticks.
    pub fn advance(&mut self, frame_dt: f32, mut tick: impl FnMut(f32)) -> u32 {
        if !(self.step.is_finite() && self.step > 0.0) {
            log::warn!("Ignoring frame with invalid step {}", self.step);
            return 0;
        }
        if frame_dt.is_finite() && frame_dt > 0.0 {
            self.accumulator += frame_dt;
        }

        let mut ticks = 0;
        while self.accumulator >= self.step {
            if self.max_substeps.is_some_and(|max| ticks >= max) {
                log::debug!(
                    "Dropping {:.4}s of simulation time after {ticks} substeps",
                    self.accumulator
                );
                self.accumulator %= self.step;
                break;
            }
            tick(self.step);
            self.accumulator -= self.step;
            ticks += 1;
        }
        ticks
    }
}

/// Drives a [`Scene`] from real frame times
pub struct Runner<S: Scene> {
    scene: S,
    stepper: FixedStep,
    input: S::Input,
}

impl<S: Scene> Runner<S> {
    pub fn new(scene: S, stepper: FixedStep) -> Self {
        Self {
            scene,
            stepper,
            input: S::Input::default(),
        }
    }

    /// Input to apply on the next frame; the platform layer writes here
    pub fn input_mut(&mut self) -> &mut S::Input {
        &mut self.input
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn stepper(&self) -> &FixedStep {
        &self.stepper
    }

    /// Run every pending tick for this frame and return the number run.
    /// One-shot input is delivered to the first tick only.
    pub fn frame(&mut self, frame_dt: f32) -> u32 {
        let Self {
            scene,
            stepper,
            input,
        } = self;
        stepper.advance(frame_dt, |dt| {
            scene.tick(input, dt);
            input.consume_edges();
        })
    }

    /// State to render for this frame
    pub fn snapshot(&self) -> Snapshot {
        self.scene.snapshot()
    }
}
