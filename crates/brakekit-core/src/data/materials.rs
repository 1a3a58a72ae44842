//! Sheet material module
//!
//! This module provides:
//! - Material specification (thickness and forming radius)
//! - Common sheet presets for quick part entry

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Sheet thickness and the radius the tooling forms on the inside of a bend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// Display name, e.g. "Mild steel 2.0"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sheet thickness (mm)
    pub thickness: f64,
    /// Inner bend radius formed by the punch (mm)
    pub inner_radius: f64,
}

impl Default for MaterialSpec {
    fn default() -> Self {
        Self {
            name: None,
            thickness: 2.0,
            inner_radius: 2.0,
        }
    }
}

impl MaterialSpec {
    pub fn new(thickness: f64, inner_radius: f64) -> Self {
        Self {
            name: None,
            thickness,
            inner_radius,
        }
    }

    pub fn named(name: impl Into<String>, thickness: f64, inner_radius: f64) -> Self {
        Self {
            name: Some(name.into()),
            thickness,
            inner_radius,
        }
    }

    /// Radius of the convex face of a bend.
    pub fn outer_radius(&self) -> f64 {
        self.inner_radius + self.thickness
    }

    pub fn validate(&self) -> Result<()> {
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(PlanError::InvalidMaterial {
                name: "thickness".to_string(),
                value: self.thickness,
            });
        }
        if !self.inner_radius.is_finite() || self.inner_radius <= 0.0 {
            return Err(PlanError::InvalidMaterial {
                name: "inner_radius".to_string(),
                value: self.inner_radius,
            });
        }
        Ok(())
    }

    /// Common sheet gauges with the punch radius usually paired with them.
    pub fn presets() -> Vec<MaterialSpec> {
        vec![
            MaterialSpec::named("Mild steel 1.0", 1.0, 1.0),
            MaterialSpec::named("Mild steel 1.5", 1.5, 1.5),
            MaterialSpec::named("Mild steel 2.0", 2.0, 2.0),
            MaterialSpec::named("Mild steel 3.0", 3.0, 3.0),
            MaterialSpec::named("Stainless 1.5", 1.5, 2.0),
            MaterialSpec::named("Aluminium 2.0", 2.0, 3.0),
            MaterialSpec::named("Aluminium 3.0", 3.0, 4.5),
        ]
    }

    /// Looks up a preset by name, ignoring case.
    pub fn preset(name: &str) -> Option<MaterialSpec> {
        Self::presets().into_iter().find(|m| {
            m.name
                .as_deref()
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
    }
}
