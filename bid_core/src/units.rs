//! # Unit Types
//!
//! Type-safe wrappers for the site-work quantities an estimate deals with.
//! They are plain `f64` newtypes: cheap, `Copy`, and serialized as bare numbers.
//!
//! ## US Customary Units
//!
//! - Length: feet (ft), inches (in)
//! - Area: square feet (SF)
//! - Volume: cubic feet (CF), cubic yards (CY = 27 CF)
//! - Mass: short tons
//! - Labor: crew hours
//!
//! ## Example
//!
//! ```rust
//! use bid_core::units::{CubicFeet, CubicYards, Feet, Inches};
//!
//! let thickness: Feet = Inches(6.0).into();
//! assert_eq!(thickness.0, 0.5);
//!
//! let volume: CubicYards = CubicFeet(54.0).into();
//! assert_eq!(volume.0, 2.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Cubic feet per cubic yard
pub const CUBIC_FEET_PER_CUBIC_YARD: f64 = 27.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * INCHES_PER_FOOT)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / INCHES_PER_FOOT)
    }
}

impl Mul<Feet> for Feet {
    type Output = SquareFeet;

    fn mul(self, rhs: Feet) -> SquareFeet {
        SquareFeet(self.0 * rhs.0)
    }
}

// ============================================================================
// Area and Volume Units
// ============================================================================

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquareFeet(pub f64);

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicFeet(pub f64);

/// Volume in cubic yards
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicYards(pub f64);

impl Mul<Feet> for SquareFeet {
    type Output = CubicFeet;

    fn mul(self, rhs: Feet) -> CubicFeet {
        CubicFeet(self.0 * rhs.0)
    }
}

impl From<CubicFeet> for CubicYards {
    fn from(cf: CubicFeet) -> Self {
        CubicYards(cf.0 / CUBIC_FEET_PER_CUBIC_YARD)
    }
}

impl From<CubicYards> for CubicFeet {
    fn from(cy: CubicYards) -> Self {
        CubicFeet(cy.0 * CUBIC_FEET_PER_CUBIC_YARD)
    }
}

impl CubicYards {
    /// Scale by a dimensionless volume factor (compaction, waste)
    pub fn scaled(self, factor: f64) -> CubicYards {
        CubicYards(self.0 * factor)
    }
}

// ============================================================================
// Mass and Labor Units
// ============================================================================

/// Mass in short tons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tons(pub f64);

/// Crew labor in hours
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaborHours(pub f64);

impl Add for LaborHours {
    type Output = LaborHours;

    fn add(self, rhs: LaborHours) -> LaborHours {
        LaborHours(self.0 + rhs.0)
    }
}
