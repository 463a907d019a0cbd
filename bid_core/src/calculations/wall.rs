//! # Retaining Wall
//!
//! Prices a boulder retaining wall: boulder tonnage from the wall face, fill
//! dirt behind it, and the crew hours to set both.
//!
//! ## Assumptions
//!
//! - One ton of boulder faces 8 SF of wall
//! - Labor scales with boulder tons and fill yards at configurable productivity
//!   (1.0 hr/ton and 1.0 hr/yd by default)
//! - A bid with no wall passes zeros and gets a zero-cost line
//!
//! ## Example
//!
//! ```rust
//! use bid_core::calculations::wall::{calculate, WallInput};
//! use bid_core::rates::RateConfiguration;
//!
//! let input = WallInput {
//!     length_ft: 20.0,
//!     height_ft: 4.0,
//!     fill_yards: 5.0,
//! };
//!
//! let wall = calculate(&input, &RateConfiguration::default()).unwrap();
//! assert_eq!(wall.quantities.boulder_tons, 10.0);
//! assert_eq!(wall.cost.cents(), 154_500);
//! assert_eq!(wall.price.cents(), 220_935);
//! ```

use serde::{Deserialize, Serialize};

use super::{require_quantity, LineItem};
use crate::equations::{boulder_tons, labor_hours, wall_face_area};
use crate::errors::CalcResult;
use crate::money::{to_minor_units, Money};
use crate::rates::RateConfiguration;
use crate::units::Feet;

/// Retaining wall measurements.
///
/// ## JSON Example
///
/// ```json
/// { "length_ft": 20.0, "height_ft": 4.0, "fill_yards": 5.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WallInput {
    /// Wall length in feet
    pub length_ft: f64,

    /// Exposed wall height in feet
    pub height_ft: f64,

    /// Fill dirt behind the wall in cubic yards
    pub fill_yards: f64,
}

impl WallInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        require_quantity("length_ft", self.length_ft)?;
        require_quantity("height_ft", self.height_ft)?;
        require_quantity("fill_yards", self.fill_yards)?;
        Ok(())
    }
}

/// Wall quantities and cost components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallQuantities {
    /// Wall face area (SF)
    pub square_feet: f64,

    /// Boulder tonnage
    pub boulder_tons: f64,

    /// Fill dirt (CY)
    pub fill_yards: f64,

    /// Crew hours for boulders and fill
    pub labor_hours: f64,

    /// Boulder material cost (cents)
    pub boulder_cost: Money,

    /// Fill material cost (cents)
    pub fill_cost: Money,

    /// Labor cost (cents)
    pub labor_cost: Money,
}

/// Priced retaining wall line
pub type WallResult = LineItem<WallQuantities>;

/// Calculate the retaining wall line item.
///
/// # Returns
///
/// * `Ok(WallResult)` - Quantities, cost, and price
/// * `Err(CalcError)` - If a measurement is negative or non-finite
pub fn calculate(input: &WallInput, rates: &RateConfiguration) -> CalcResult<WallResult> {
    input.validate()?;

    let square_feet = wall_face_area(Feet(input.length_ft), Feet(input.height_ft));
    let tons = boulder_tons(square_feet);

    let boulder_cost = to_minor_units(tons.0 * rates.boulder_rate_per_ton)?;
    let fill_cost = to_minor_units(input.fill_yards * rates.fill_rate_per_yard)?;

    let hours = labor_hours(tons.0, rates.wall_labor_hours_per_ton)
        + labor_hours(input.fill_yards, rates.wall_labor_hours_per_fill_yard);
    let labor_cost = to_minor_units(hours.0 * rates.hourly_labor_rate)?;

    let quantities = WallQuantities {
        square_feet: square_feet.0,
        boulder_tons: tons.0,
        fill_yards: input.fill_yards,
        labor_hours: hours.0,
        boulder_cost,
        fill_cost,
        labor_cost,
    };

    LineItem::priced(quantities, boulder_cost + fill_cost + labor_cost, rates.markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_wall() -> WallInput {
        WallInput {
            length_ft: 20.0,
            height_ft: 4.0,
            fill_yards: 5.0,
        }
    }

    #[test]
    fn test_wall_quantities() {
        let wall = calculate(&test_wall(), &RateConfiguration::default()).unwrap();
        let q = wall.quantities;
        assert_eq!(q.square_feet, 80.0);
        assert_eq!(q.boulder_tons, 10.0);
        assert_eq!(q.labor_hours, 15.0);
    }

    #[test]
    fn test_wall_costs() {
        let wall = calculate(&test_wall(), &RateConfiguration::default()).unwrap();
        assert_eq!(wall.quantities.boulder_cost.cents(), 75_000);
        assert_eq!(wall.quantities.fill_cost.cents(), 7_500);
        assert_eq!(wall.quantities.labor_cost.cents(), 72_000);
        assert_eq!(wall.cost.cents(), 154_500);
        assert_eq!(wall.price.cents(), 220_935);
    }

    #[test]
    fn test_wall_productivity_rates() {
        let rates = RateConfiguration {
            wall_labor_hours_per_ton: 1.5,
            wall_labor_hours_per_fill_yard: 0.5,
            ..RateConfiguration::default()
        };
        let wall = calculate(&test_wall(), &rates).unwrap();
        // 10 tons * 1.5 + 5 yd * 0.5 = 17.5 hr
        assert_eq!(wall.quantities.labor_hours, 17.5);
        assert_eq!(wall.quantities.labor_cost.cents(), 84_000);
    }

    #[test]
    fn test_no_wall() {
        let input = WallInput::default();
        let wall = calculate(&input, &RateConfiguration::default()).unwrap();
        assert_eq!(wall.cost, Money::ZERO);
        assert_eq!(wall.price, Money::ZERO);
    }

    #[test]
    fn test_fill_only_wall() {
        let input = WallInput {
            length_ft: 0.0,
            height_ft: 0.0,
            fill_yards: 2.0,
        };
        let wall = calculate(&input, &RateConfiguration::default()).unwrap();
        // 2 * $15 + 2 hr * $48
        assert_eq!(wall.cost.cents(), 12_600);
    }

    #[test]
    fn test_invalid_length() {
        let mut input = test_wall();
        input.length_ft = -5.0;
        assert!(calculate(&input, &RateConfiguration::default()).is_err());
    }

    #[test]
    fn test_serialization() {
        let wall = calculate(&test_wall(), &RateConfiguration::default()).unwrap();
        let json = serde_json::to_string_pretty(&wall).unwrap();
        assert!(json.contains("boulder_tons"));
        assert!(json.contains("\"price\": 220935"));
        let roundtrip: WallResult = serde_json::from_str(&json).unwrap();
        assert_eq!(wall, roundtrip);
    }
}
