use bevy::prelude::*;

use crate::canvas::DrawSurface;
use crate::registry::BodyRegistry;
use crate::render::render_pass;
use crate::resources::SimConfig;
use crate::simulation::{StepReport, step};

/// Grants frames to the driver, yielding to the host between them.
///
/// Returns `false` once the host stops scheduling frames.
pub trait FrameScheduler {
    fn next_frame(&mut self) -> bool;
}

/// Grants a fixed number of frames back to back.
#[derive(Clone, Copy, Debug)]
pub struct FixedFrames {
    remaining: u64,
}

impl FixedFrames {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }
}

impl FrameScheduler for FixedFrames {
    fn next_frame(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Result of one {clear, step, render} cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Zero-based index of the frame just completed.
    pub frame: u64,
    pub step: StepReport,
}

/// Runs frames strictly one after another over a registry it is handed each time.
#[derive(Resource, Debug, Default)]
pub struct FrameDriver {
    frames: u64,
    first_non_finite: Option<u64>,
}

impl FrameDriver {
    /// Frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// First frame after which some body held a non-finite position.
    pub fn first_non_finite(&self) -> Option<u64> {
        self.first_non_finite
    }

    pub fn run_frame<S: DrawSurface>(
        &mut self,
        registry: &mut BodyRegistry,
        config: &SimConfig,
        surface: &mut S,
    ) -> FrameReport {
        let frame = self.frames;
        surface.clear_rect(
            0.0,
            0.0,
            config.surface.width as f64,
            config.surface.height as f64,
        );
        let report = step(registry, config);
        render_pass(registry, &config.label, surface);
        self.frames += 1;

        if !report.is_finite() && self.first_non_finite.is_none() {
            self.first_non_finite = Some(frame);
            let names: Vec<&str> = report
                .non_finite
                .iter()
                .filter_map(|&index| registry.get(index).map(|body| body.name()))
                .collect();
            warn!(
                "frame {frame}: non-finite positions for {}",
                names.join(", ")
            );
        }
        debug!("frame {frame}: {} pair updates", report.pairs);

        FrameReport {
            frame,
            step: report,
        }
    }

    /// Runs frames for as long as `scheduler` grants them and returns the number run.
    pub fn run<F: FrameScheduler, S: DrawSurface>(
        &mut self,
        scheduler: &mut F,
        registry: &mut BodyRegistry,
        config: &SimConfig,
        surface: &mut S,
    ) -> u64 {
        info!("frame driver starting with {} bodies", registry.len());
        let mut ran = 0;
        while scheduler.next_frame() {
            self.run_frame(registry, config, surface);
            ran += 1;
        }
        ran
    }
}
