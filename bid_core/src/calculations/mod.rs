//! # Line Item Calculations
//!
//! One module per line item of a bid. Each calculation follows the pattern:
//!
//! - `*Quantities` - Physical quantities and cost components (JSON-serializable)
//! - `*Result` - A [`LineItem`] over those quantities: cost and marked-up price
//! - `calculate(..) -> CalcResult<*Result>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`wall`] - Boulder retaining wall with fill
//! - [`soil`] - Soil removal (labor only)
//! - [`road_base`] - Compacted road base under the slab
//! - [`pour_finish`] - Concrete pour and flatwork finishing
//!
//! Soil removal, road base, and pour & finish together make up the concrete
//! section; [`concrete_section_totals`] aggregates them.

pub mod pour_finish;
pub mod road_base;
pub mod soil;
pub mod wall;

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::money::{apply_factor, Money};

// Re-export commonly used types
pub use pour_finish::{PourFinishQuantities, PourFinishResult};
pub use road_base::{RoadBaseQuantities, RoadBaseResult};
pub use soil::{SoilQuantities, SoilResult};
pub use wall::{WallInput, WallQuantities, WallResult};

/// One priced line item of a bid.
///
/// `price` is always `cost × markup` rounded to the cent, applied exactly once
/// here. Aggregates sum prices; they never re-apply the markup.
///
/// ## JSON Example
///
/// ```json
/// {
///   "quantities": { "excavated_cubic_yards": 6.17, "labor_hours": 3.7 },
///   "cost": 17778,
///   "price": 25423
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItem<Q> {
    /// Quantities and cost components for this line
    pub quantities: Q,

    /// Internal cost (cents)
    pub cost: Money,

    /// Customer-facing price (cents)
    pub price: Money,
}

impl<Q> LineItem<Q> {
    /// Build a line item, applying the markup to its cost.
    pub fn priced(quantities: Q, cost: Money, markup: f64) -> CalcResult<Self> {
        let price = apply_factor(cost, markup)?;
        Ok(LineItem {
            quantities,
            cost,
            price,
        })
    }

    /// Cost and price of this line as totals
    pub fn totals(&self) -> SectionTotals {
        SectionTotals {
            cost: self.cost,
            price: self.price,
        }
    }
}

/// Summed cost and price over one or more line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SectionTotals {
    /// Sum of line item costs (cents)
    pub cost: Money,

    /// Sum of line item prices (cents)
    pub price: Money,
}

impl Add for SectionTotals {
    type Output = SectionTotals;

    fn add(self, rhs: SectionTotals) -> SectionTotals {
        SectionTotals {
            cost: self.cost + rhs.cost,
            price: self.price + rhs.price,
        }
    }
}

impl Sum for SectionTotals {
    fn sum<I: Iterator<Item = SectionTotals>>(iter: I) -> SectionTotals {
        iter.fold(SectionTotals::default(), Add::add)
    }
}

/// Totals of the concrete section: soil removal + road base + pour & finish.
pub fn concrete_section_totals(
    soil: &SoilResult,
    road_base: &RoadBaseResult,
    pour_finish: &PourFinishResult,
) -> SectionTotals {
    [soil.totals(), road_base.totals(), pour_finish.totals()]
        .into_iter()
        .sum()
}

/// Reject a quantity a calculator cannot price.
pub(crate) fn require_quantity(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Quantity must be finite"));
    }
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Quantity cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priced_applies_markup_once() {
        let item = LineItem::priced((), Money::from_cents(154_500), 1.43).unwrap();
        assert_eq!(item.cost.cents(), 154_500);
        assert_eq!(item.price.cents(), 220_935);
    }

    #[test]
    fn test_totals_sum_prices_not_cost_times_markup() {
        // 150 * 1.43 = 214.5 -> 215 per line; 300 * 1.43 = 429 for the sum
        let a = LineItem::priced((), Money::from_cents(150), 1.43).unwrap();
        let b = LineItem::priced((), Money::from_cents(150), 1.43).unwrap();
        let total: SectionTotals = [a.totals(), b.totals()].into_iter().sum();
        assert_eq!(total.cost.cents(), 300);
        assert_eq!(total.price.cents(), 430);
    }

    #[test]
    fn test_require_quantity() {
        assert!(require_quantity("x", 0.0).is_ok());
        assert!(require_quantity("x", 12.5).is_ok());
        assert!(require_quantity("x", -0.1).is_err());
        assert!(require_quantity("x", f64::NAN).is_err());
    }
}
