//! Unit formatting utilities
//!
//! All engine geometry is in millimeters and degrees. These helpers only
//! convert for display, e.g. the dimension labels handed to the plotter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(format!("Unknown measurement system: {}", s)),
        }
    }
}

/// Convert a millimeter value into the given system
pub fn from_mm(value_mm: f64, system: MeasurementSystem) -> f64 {
    match system {
        MeasurementSystem::Metric => value_mm,
        MeasurementSystem::Imperial => value_mm / MM_PER_INCH,
    }
}

/// Format length value for display
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
/// * `decimals` - Digits after the decimal point
pub fn format_length(value_mm: f64, system: MeasurementSystem, decimals: usize) -> String {
    format!("{:.*}", decimals, from_mm(value_mm, system))
}

/// Format length value with its unit label, e.g. `"98.00 mm"`
pub fn format_length_with_unit(
    value_mm: f64,
    system: MeasurementSystem,
    decimals: usize,
) -> String {
    format!(
        "{} {}",
        format_length(value_mm, system, decimals),
        get_unit_label(system)
    )
}

/// Format an included bend angle, e.g. `"90°"`
pub fn format_angle(degrees: f64) -> String {
    if (degrees - degrees.round()).abs() < 1e-9 {
        format!("{:.0}°", degrees)
    } else {
        format!("{:.1}°", degrees)
    }
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
