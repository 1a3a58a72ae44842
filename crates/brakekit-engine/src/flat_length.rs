//! Flat length calculation.
//!
//! The flat length is the blank length that, once bent, gives the requested
//! flange dimensions: the sum of the segment lengths minus one deduction per
//! formed bend. Deductions are approximations; the strategy is pluggable
//! through [`BendDeduction`].

use brakekit_core::{
    BendConvention, BendPlan, BendStep, DeductionStrategy, LengthReference, MaterialSpec,
    STRAIGHT_ANGLE,
};
use serde::Serialize;
use tracing::debug;

use crate::error::EngineResult;
use crate::setback::setback;
use crate::warnings::GeometryWarning;

/// Everything a deduction strategy may need about one bend.
#[derive(Debug, Clone, Copy)]
pub struct BendContext<'a> {
    /// Heading change in radians, `0..=PI`
    pub deviation: f64,
    pub material: &'a MaterialSpec,
    pub length_reference: LengthReference,
}

impl BendContext<'_> {
    pub fn deviation_degrees(&self) -> f64 {
        self.deviation.to_degrees()
    }

    /// Setback on the face the lengths are measured on.
    pub fn setback(&self) -> f64 {
        let radius = match self.length_reference {
            LengthReference::Outer => self.material.outer_radius(),
            LengthReference::Inner => self.material.inner_radius,
        };
        setback(radius, self.deviation)
    }
}

/// Length consumed by one bend.
///
/// Implementations should grow strictly with the deviation so that closing a
/// bend always shortens the blank. The built-in strategies do, with one
/// exception: `KFactor` on inside dimensions subtracts the inner setbacks
/// but adds back an allowance that includes part of the thickness, so open
/// bends give a negative deduction that first falls as the bend closes.
pub trait BendDeduction {
    fn deduction(&self, bend: &BendContext<'_>) -> f64;

    fn name(&self) -> &str {
        "Custom"
    }
}

impl BendDeduction for DeductionStrategy {
    fn deduction(&self, bend: &BendContext<'_>) -> f64 {
        let t = bend.material.thickness;
        match *self {
            DeductionStrategy::Linear { coefficient } => {
                coefficient * t * bend.deviation_degrees() / 90.0
            }
            DeductionStrategy::Tangent => 2.0 * setback(t, bend.deviation),
            DeductionStrategy::KFactor { k_factor } => {
                let allowance = bend.deviation * (bend.material.inner_radius + k_factor * t);
                2.0 * bend.setback() - allowance
            }
        }
    }

    fn name(&self) -> &str {
        DeductionStrategy::name(self)
    }
}

/// Deduction applied at one bend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepDeduction {
    pub step_index: usize,
    pub deduction: f64,
}

/// Result of a flat length calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatLength {
    /// Blank length after deductions, never negative
    pub flat_length: f64,
    /// Sum of the segment lengths
    pub total_outer: f64,
    pub total_deduction: f64,
    pub deductions: Vec<StepDeduction>,
    /// True when the raw flat length was negative and clamped to zero
    pub clamped: bool,
    pub warnings: Vec<GeometryWarning>,
}

/// Flat length of `steps` in sheet of `thickness`, using the default
/// convention (linear deduction of one thickness per 90°, trailing angle
/// ignored).
///
/// Input that cannot be measured (no steps, non-finite or non-positive
/// lengths or thickness, angles outside 0..=180) gives a zero flat length
/// carrying an [`GeometryWarning::InvalidInput`] warning.
pub fn compute_flat_length(steps: &[BendStep], thickness: f64) -> FlatLength {
    let convention = BendConvention::default();
    let plan = BendPlan::new(steps.to_vec(), MaterialSpec::new(thickness, thickness));
    match plan.validate() {
        Ok(()) => flat_length_with(&plan, &convention, &convention.deduction),
        Err(e) => unmeasured(plan.total_length(), e.to_string()),
    }
}

fn unmeasured(total_outer: f64, reason: String) -> FlatLength {
    let warning = GeometryWarning::InvalidInput { reason };
    warning.log();
    FlatLength {
        flat_length: 0.0,
        total_outer,
        total_deduction: 0.0,
        deductions: Vec::new(),
        clamped: false,
        warnings: vec![warning],
    }
}

fn flat_length_with(
    plan: &BendPlan,
    convention: &BendConvention,
    strategy: &dyn BendDeduction,
) -> FlatLength {
    let total_outer = plan.total_length();

    let deductions: Vec<StepDeduction> = plan
        .bend_step_indices(convention.trailing_angle)
        .into_iter()
        .map(|step_index| {
            let angle = plan.steps[step_index].angle;
            let bend = BendContext {
                deviation: (STRAIGHT_ANGLE - angle).to_radians(),
                material: &plan.material,
                length_reference: convention.length_reference,
            };
            StepDeduction {
                step_index,
                deduction: strategy.deduction(&bend),
            }
        })
        .collect();

    let total_deduction: f64 = deductions.iter().map(|d| d.deduction).sum();
    let raw = total_outer - total_deduction;
    if !raw.is_finite() {
        return unmeasured(
            total_outer,
            format!("{} deduction gave {}", strategy.name(), total_deduction),
        );
    }

    let mut warnings = Vec::new();
    let clamped = raw < 0.0;
    if clamped {
        let warning = GeometryWarning::NegativeFlatLength { raw };
        warning.log();
        warnings.push(warning);
    }

    debug!(
        "Flat length {:.3} mm ({} bends, {} deduction)",
        raw.max(0.0),
        deductions.len(),
        strategy.name()
    );

    FlatLength {
        flat_length: raw.max(0.0),
        total_outer,
        total_deduction,
        deductions,
        clamped,
        warnings,
    }
}

/// Flat length calculator bound to a convention and deduction strategy.
pub struct FlatLengthCalculator {
    convention: BendConvention,
    custom: Option<Box<dyn BendDeduction + Send + Sync>>,
}

impl FlatLengthCalculator {
    /// Uses the convention's own deduction strategy.
    pub fn new(convention: BendConvention) -> Self {
        Self {
            convention,
            custom: None,
        }
    }

    /// Uses `strategy` in place of the convention's deduction.
    pub fn with_strategy(
        convention: BendConvention,
        strategy: impl BendDeduction + Send + Sync + 'static,
    ) -> Self {
        Self {
            convention,
            custom: Some(Box::new(strategy)),
        }
    }

    pub fn convention(&self) -> &BendConvention {
        &self.convention
    }

    pub fn calculate(&self, plan: &BendPlan) -> EngineResult<FlatLength> {
        plan.validate()?;
        self.convention.validate()?;
        let strategy: &dyn BendDeduction = match &self.custom {
            Some(custom) => custom.as_ref(),
            None => &self.convention.deduction,
        };
        Ok(flat_length_with(plan, &self.convention, strategy))
    }
}
