//! Plot traces for an external plotting front end.
//!
//! The engine does not draw. It hands the plotter flat coordinate arrays
//! (one per trace) and text labels anchored in part coordinates.

use brakekit_core::units::{format_angle, format_length, MeasurementSystem};
use brakekit_core::{BendPlan, Point};
use serde::Serialize;

use crate::aligner::AlignedFrame;
use crate::error::EngineResult;
use crate::solid::SolidProfile;

/// A named polyline as parallel coordinate arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Trace {
    pub fn from_points(name: impl Into<String>, points: &[Point]) -> Self {
        Self {
            name: name.into(),
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Text placed at a point of the drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionLabel {
    pub position: Point,
    pub text: String,
}

/// Everything the plotter needs for one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotTraces {
    /// Filled cross-section outline
    pub solid: Trace,
    /// Mold-line polyline
    pub apex: Trace,
    pub labels: Vec<DimensionLabel>,
}

impl PlotTraces {
    /// Traces of a built profile with a length label at the middle of every
    /// apex segment and an angle label at every formed bend.
    pub fn from_profile(
        profile: &SolidProfile,
        plan: &BendPlan,
        system: MeasurementSystem,
        decimals: usize,
    ) -> Self {
        let mut labels = Vec::with_capacity(plan.len() * 2);

        for (step, segment) in plan.steps.iter().zip(profile.apex.windows(2)) {
            labels.push(DimensionLabel {
                position: segment[0].midpoint(&segment[1]),
                text: format_length(step.length, system, decimals),
            });
        }

        for pivot in &profile.pivots {
            if let Some(&vertex) = profile.apex.get(pivot.step_index + 1) {
                labels.push(DimensionLabel {
                    position: vertex,
                    text: format_angle(plan.steps[pivot.step_index].angle),
                });
            }
        }

        Self {
            solid: Trace::from_points("solid", &profile.polygon),
            apex: Trace::from_points("apex", &profile.apex),
            labels,
        }
    }

    /// Traces of an animation frame, labelled with the active bend's
    /// current angle.
    pub fn from_frame(frame: &AlignedFrame) -> Self {
        let labels = frame
            .apex
            .get(frame.step_index + 1)
            .map(|&vertex| DimensionLabel {
                position: vertex,
                text: format_angle(frame.current_angle),
            })
            .into_iter()
            .collect();

        Self {
            solid: Trace::from_points("solid", &frame.polygon),
            apex: Trace::from_points("apex", &frame.apex),
            labels,
        }
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
