//! # Road Base
//!
//! Compacted aggregate base under the slab. Road base compacts when placed,
//! so the loose volume purchased and spread is the design volume times the
//! compaction factor. A plate compactor is rented for a flat fee regardless
//! of volume.
//!
//! ## Example
//!
//! ```rust
//! use bid_core::calculations::road_base::calculate;
//! use bid_core::rates::RateConfiguration;
//! use bid_core::units::CubicYards;
//!
//! let base = calculate(CubicYards(10.0), &RateConfiguration::default()).unwrap();
//! // 12 loose CY: $420 material + $576 labor + $250 compactor
//! assert_eq!(base.cost.cents(), 124_600);
//! ```

use serde::{Deserialize, Serialize};

use super::{require_quantity, LineItem};
use crate::equations::labor_hours;
use crate::errors::CalcResult;
use crate::money::{to_minor_units, Money};
use crate::rates::RateConfiguration;
use crate::units::CubicYards;

/// Road base quantities and cost components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadBaseQuantities {
    /// In-place volume (CY)
    pub design_cubic_yards: f64,

    /// Purchased loose volume (CY)
    pub loose_cubic_yards: f64,

    /// Crew hours to spread and compact
    pub labor_hours: f64,

    /// Base material cost (cents)
    pub material_cost: Money,

    /// Labor cost (cents)
    pub labor_cost: Money,

    /// Compactor rental (cents)
    pub compactor_fee: Money,
}

/// Priced road base line
pub type RoadBaseResult = LineItem<RoadBaseQuantities>;

/// Calculate the road base line item from the shared design volume.
pub fn calculate(design: CubicYards, rates: &RateConfiguration) -> CalcResult<RoadBaseResult> {
    require_quantity("design_cubic_yards", design.0)?;

    let loose = design.scaled(rates.compaction_factor);
    let material_cost = to_minor_units(loose.0 * rates.base_material_rate_per_cy)?;

    let hours = labor_hours(loose.0, rates.base_labor_hours_per_cy);
    let labor_cost = to_minor_units(hours.0 * rates.hourly_labor_rate)?;

    let compactor_fee = to_minor_units(rates.compactor_rental_fee)?;

    let quantities = RoadBaseQuantities {
        design_cubic_yards: design.0,
        loose_cubic_yards: loose.0,
        labor_hours: hours.0,
        material_cost,
        labor_cost,
        compactor_fee,
    };

    LineItem::priced(quantities, material_cost + labor_cost + compactor_fee, rates.markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::design_cubic_yards;
    use crate::units::{Inches, SquareFeet};

    #[test]
    fn test_road_base() {
        let design = design_cubic_yards(SquareFeet(500.0), Inches(4.0));
        let base = calculate(design, &RateConfiguration::default()).unwrap();
        let q = base.quantities;

        assert!((q.loose_cubic_yards - 7.407_407).abs() < 1e-6);
        assert_eq!(q.material_cost.cents(), 25_926);
        assert_eq!(q.labor_cost.cents(), 35_556);
        assert_eq!(q.compactor_fee.cents(), 25_000);
        assert_eq!(base.cost.cents(), 86_482);
        assert_eq!(base.price.cents(), 123_669);
    }

    #[test]
    fn test_compactor_fee_is_flat() {
        let rates = RateConfiguration::default();
        let small = calculate(CubicYards(0.0), &rates).unwrap();
        let large = calculate(CubicYards(100.0), &rates).unwrap();
        assert_eq!(small.quantities.compactor_fee, large.quantities.compactor_fee);
        assert_eq!(small.cost.cents(), 25_000);
    }

    #[test]
    fn test_loose_volume_exceeds_design() {
        let base = calculate(CubicYards(5.0), &RateConfiguration::default()).unwrap();
        assert!(base.quantities.loose_cubic_yards > base.quantities.design_cubic_yards);
        assert!((base.quantities.loose_cubic_yards - 6.0).abs() < 1e-12);
    }
}
