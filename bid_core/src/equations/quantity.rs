//! # Quantity Takeoff Formulas
//!
//! Converts field measurements into material quantities and crew hours.
//! Every calculator goes through these functions so a formula exists in
//! exactly one place.
//!
//! ## Notation
//!
//! - `L` = wall length (ft)
//! - `H` = wall height (ft)
//! - `A` = slab area (SF)
//! - `t` = slab thickness (in)

use crate::units::{CubicFeet, CubicYards, Feet, Inches, LaborHours, SquareFeet, Tons};

/// Wall face area one ton of boulder covers (SF/ton)
pub const BOULDER_COVERAGE_SF_PER_TON: f64 = 8.0;

/// Combined divisor for SF × in → CY: 12 in/ft × 27 CF/CY
pub const SLAB_VOLUME_DIVISOR: f64 = 324.0;

// =============================================================================
// RETAINING WALL
// =============================================================================

/// Exposed face area of a retaining wall
///
/// # Formula
/// SF = L × H
#[inline]
pub fn wall_face_area(length: Feet, height: Feet) -> SquareFeet {
    length * height
}

/// Boulder tonnage needed to face a wall
///
/// # Formula
/// tons = SF / 8
///
/// # Example
/// ```rust
/// use bid_core::equations::boulder_tons;
/// use bid_core::units::SquareFeet;
///
/// assert_eq!(boulder_tons(SquareFeet(80.0)).0, 10.0);
/// ```
#[inline]
pub fn boulder_tons(face_area: SquareFeet) -> Tons {
    Tons(face_area.0 / BOULDER_COVERAGE_SF_PER_TON)
}

// =============================================================================
// SLAB VOLUME
// =============================================================================

/// Design (in-place) volume of a slab
///
/// Folds the inch-to-foot and cubic-foot-to-cubic-yard conversions into a
/// single divisor so there is no intermediate value to round.
///
/// # Formula
/// CY = A × t / 324
///
/// # Arguments
/// * `area` - Slab area in square feet
/// * `thickness` - Slab thickness in inches
///
/// # Example
/// ```rust
/// use bid_core::equations::design_cubic_yards;
/// use bid_core::units::{Inches, SquareFeet};
///
/// let cy = design_cubic_yards(SquareFeet(324.0), Inches(1.0));
/// assert!((cy.0 - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn design_cubic_yards(area: SquareFeet, thickness: Inches) -> CubicYards {
    CubicYards(area.0 * thickness.0 / SLAB_VOLUME_DIVISOR)
}

/// Design volume computed through explicit unit conversions (in → ft, CF → CY).
///
/// Agrees with [`design_cubic_yards`] to floating-point tolerance; kept for
/// cross-checking the folded divisor.
pub fn design_cubic_yards_two_step(area: SquareFeet, thickness: Inches) -> CubicYards {
    let cubic_feet: CubicFeet = area * Feet::from(thickness);
    cubic_feet.into()
}

// =============================================================================
// LABOR
// =============================================================================

/// Crew hours for a quantity at a productivity rate (hours per unit)
#[inline]
pub fn labor_hours(quantity: f64, hours_per_unit: f64) -> LaborHours {
    LaborHours(quantity * hours_per_unit)
}

/// Round a display quantity to two decimals (half away from zero)
#[inline]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
