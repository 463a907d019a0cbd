//! # Concrete Pour & Finish
//!
//! Ready-mix concrete plus flatwork (placing, finishing, setup).
//!
//! ## Assumptions
//!
//! - Concrete is ordered at the design volume times the waste factor, never less
//! - Flatwork is priced by area, but never below the minimum charge; the floor
//!   keeps setup and finishing covered on small slabs
//!
//! ## Example
//!
//! ```rust
//! use bid_core::calculations::pour_finish::calculate;
//! use bid_core::equations::design_cubic_yards;
//! use bid_core::rates::RateConfiguration;
//! use bid_core::units::{Inches, SquareFeet};
//!
//! let area = SquareFeet(100.0);
//! let design = design_cubic_yards(area, Inches(4.0));
//! let pour = calculate(design, area, &RateConfiguration::default()).unwrap();
//!
//! // 100 SF * $1.75 = $175, below the $1,500 minimum
//! assert!(pour.quantities.flatwork_minimum_applied);
//! assert_eq!(pour.quantities.flatwork_cost.cents(), 150_000);
//! ```

use serde::{Deserialize, Serialize};

use super::{require_quantity, LineItem};
use crate::errors::CalcResult;
use crate::money::{to_minor_units, Money};
use crate::rates::RateConfiguration;
use crate::units::{CubicYards, SquareFeet};

/// Pour & finish quantities and cost components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PourFinishQuantities {
    /// Slab design volume (CY)
    pub design_cubic_yards: f64,

    /// Concrete ordered including waste (CY)
    pub ordered_cubic_yards: f64,

    /// Slab area (SF)
    pub slab_area_sf: f64,

    /// Concrete material cost (cents)
    pub material_cost: Money,

    /// Area-based flatwork charge before the minimum (cents)
    pub area_flatwork_cost: Money,

    /// Flatwork charge after the minimum (cents)
    pub flatwork_cost: Money,

    /// True when the minimum charge set the flatwork cost
    pub flatwork_minimum_applied: bool,
}

/// Priced pour & finish line
pub type PourFinishResult = LineItem<PourFinishQuantities>;

/// Calculate the pour & finish line item from the shared design volume.
pub fn calculate(
    design: CubicYards,
    slab_area: SquareFeet,
    rates: &RateConfiguration,
) -> CalcResult<PourFinishResult> {
    require_quantity("design_cubic_yards", design.0)?;
    require_quantity("slab_area_sf", slab_area.0)?;

    let ordered = design.scaled(rates.waste_factor);
    let material_cost = to_minor_units(ordered.0 * rates.concrete_material_rate_per_cy)?;

    let area_flatwork_cost = to_minor_units(slab_area.0 * rates.flatwork_rate_per_sf)?;
    let minimum = to_minor_units(rates.flatwork_minimum_charge)?;
    let flatwork_cost = area_flatwork_cost.max(minimum);

    let quantities = PourFinishQuantities {
        design_cubic_yards: design.0,
        ordered_cubic_yards: ordered.0,
        slab_area_sf: slab_area.0,
        material_cost,
        area_flatwork_cost,
        flatwork_cost,
        flatwork_minimum_applied: area_flatwork_cost < minimum,
    };

    LineItem::priced(quantities, material_cost + flatwork_cost, rates.markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::design_cubic_yards;
    use crate::units::Inches;

    fn pour(area_sf: f64, thickness_in: f64) -> PourFinishResult {
        let area = SquareFeet(area_sf);
        let design = design_cubic_yards(area, Inches(thickness_in));
        calculate(design, area, &RateConfiguration::default()).unwrap()
    }

    #[test]
    fn test_pour_finish_500_sf() {
        let result = pour(500.0, 4.0);
        let q = result.quantities;

        assert!((q.ordered_cubic_yards - 7.407_407).abs() < 1e-6);
        assert_eq!(q.material_cost.cents(), 166_667);
        assert_eq!(q.area_flatwork_cost.cents(), 87_500);
        assert_eq!(q.flatwork_cost.cents(), 150_000);
        assert!(q.flatwork_minimum_applied);
        assert_eq!(result.cost.cents(), 316_667);
        assert_eq!(result.price.cents(), 452_834);
    }

    #[test]
    fn test_flatwork_floor_on_small_slab() {
        let result = pour(100.0, 4.0);
        assert_eq!(result.quantities.area_flatwork_cost.cents(), 17_500);
        assert_eq!(result.quantities.flatwork_cost.cents(), 150_000);
    }

    #[test]
    fn test_area_pricing_above_floor() {
        // 2000 SF * $1.75 = $3,500 > $1,500
        let result = pour(2000.0, 4.0);
        assert!(!result.quantities.flatwork_minimum_applied);
        assert_eq!(result.quantities.flatwork_cost.cents(), 350_000);
    }

    #[test]
    fn test_floor_boundary_is_not_flagged() {
        // Exactly at the floor: area pricing equals the minimum
        let area = SquareFeet(1500.0 / 1.75);
        let design = design_cubic_yards(area, Inches(4.0));
        let result = calculate(design, area, &RateConfiguration::default()).unwrap();
        assert_eq!(result.quantities.flatwork_cost.cents(), 150_000);
        assert!(!result.quantities.flatwork_minimum_applied);
    }

    #[test]
    fn test_order_exceeds_design() {
        let result = pour(750.0, 6.0);
        assert!(result.quantities.ordered_cubic_yards > result.quantities.design_cubic_yards);
    }
}
