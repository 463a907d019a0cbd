//! # Estimating Equations
//!
//! The quantity formulas shared by every line item calculator. Having them in
//! one place keeps the takeoff math auditable and guarantees the wall, soil,
//! road base, and concrete calculators use the same conversions.
//!
//! ## Modules
//!
//! - [`quantity`] - Area, volume, tonnage, and labor-hour formulas
//!
//! ## Conventions
//!
//! - Measurements arrive in feet (lengths), square feet (areas), and inches
//!   (thicknesses); volumes are reported in cubic yards.
//! - Formulas never round. Rounding happens only when a dollar amount is
//!   converted to cents, or when a quantity is prepared for the handoff.

pub mod quantity;

pub use quantity::{
    boulder_tons,
    design_cubic_yards,
    design_cubic_yards_two_step,
    labor_hours,
    round_to_hundredths,
    wall_face_area,
    BOULDER_COVERAGE_SF_PER_TON,
    SLAB_VOLUME_DIVISOR,
};
