//! # Soil Removal
//!
//! Excavation of the slab footprint to the design volume. Labor only: no
//! material or haul-off cost is modeled.

use serde::{Deserialize, Serialize};

use super::{require_quantity, LineItem};
use crate::equations::labor_hours;
use crate::errors::CalcResult;
use crate::money::to_minor_units;
use crate::rates::RateConfiguration;
use crate::units::CubicYards;

/// Soil removal quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilQuantities {
    /// Excavated volume, equal to the slab design volume (CY)
    pub excavated_cubic_yards: f64,

    /// Crew hours to excavate
    pub labor_hours: f64,
}

/// Priced soil removal line
pub type SoilResult = LineItem<SoilQuantities>;

/// Calculate the soil removal line item from the shared design volume.
pub fn calculate(design: CubicYards, rates: &RateConfiguration) -> CalcResult<SoilResult> {
    require_quantity("design_cubic_yards", design.0)?;

    let hours = labor_hours(design.0, rates.soil_labor_hours_per_cy);
    let cost = to_minor_units(hours.0 * rates.hourly_labor_rate)?;

    let quantities = SoilQuantities {
        excavated_cubic_yards: design.0,
        labor_hours: hours.0,
    };

    LineItem::priced(quantities, cost, rates.markup)
}
