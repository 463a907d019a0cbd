//! # Rate Configuration
//!
//! Every coefficient the estimate uses: markup, labor rate, material rates,
//! productivity factors, volume factors, flat fees, and minimum charges.
//! A `RateConfiguration` is supplied with each computation and never mutated
//! by the engine, so a bid can carry its own overrides without affecting any
//! other bid.
//!
//! ## JSON
//!
//! Missing fields take their default, so a rate file only needs the values it
//! overrides:
//!
//! ```json
//! { "markup": 1.5, "concrete_material_rate_per_cy": 240.0 }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bid_core::rates::RateConfiguration;
//!
//! let rates = RateConfiguration::default().with_markup(1.5);
//! assert_eq!(rates.markup, 1.5);
//! assert_eq!(rates.hourly_labor_rate, 48.0);
//! assert!(rates.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Immutable set of named estimating coefficients.
///
/// Dollar amounts are in dollars (not cents); they are converted to cents at
/// the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfiguration {
    /// Price multiplier applied to each line item's cost
    pub markup: f64,

    /// Crew labor rate ($/hr)
    pub hourly_labor_rate: f64,

    // === Retaining wall ===
    /// Boulder material rate ($/ton)
    pub boulder_rate_per_ton: f64,

    /// Fill dirt material rate ($/CY)
    pub fill_rate_per_yard: f64,

    /// Crew hours to set one ton of boulder
    pub wall_labor_hours_per_ton: f64,

    /// Crew hours to place one yard of fill
    pub wall_labor_hours_per_fill_yard: f64,

    // === Soil removal ===
    /// Crew hours to excavate one design CY
    pub soil_labor_hours_per_cy: f64,

    // === Road base ===
    /// Loose-to-compacted volume ratio for road base
    pub compaction_factor: f64,

    /// Road base material rate ($/loose CY)
    pub base_material_rate_per_cy: f64,

    /// Crew hours to spread and compact one loose CY
    pub base_labor_hours_per_cy: f64,

    /// Flat plate compactor rental ($), independent of volume
    pub compactor_rental_fee: f64,

    // === Concrete pour & finish ===
    /// Over-order ratio covering spillage and form loss
    pub waste_factor: f64,

    /// Ready-mix concrete rate ($/CY ordered)
    pub concrete_material_rate_per_cy: f64,

    /// Flatwork finishing rate ($/SF)
    pub flatwork_rate_per_sf: f64,

    /// Minimum flatwork charge ($)
    pub flatwork_minimum_charge: f64,
}

impl Default for RateConfiguration {
    fn default() -> Self {
        RateConfiguration {
            markup: 1.43,
            hourly_labor_rate: 48.0,
            boulder_rate_per_ton: 75.0,
            fill_rate_per_yard: 15.0,
            wall_labor_hours_per_ton: 1.0,
            wall_labor_hours_per_fill_yard: 1.0,
            soil_labor_hours_per_cy: 0.6,
            compaction_factor: 1.20,
            base_material_rate_per_cy: 35.0,
            base_labor_hours_per_cy: 1.0,
            compactor_rental_fee: 250.0,
            waste_factor: 1.20,
            concrete_material_rate_per_cy: 225.0,
            flatwork_rate_per_sf: 1.75,
            flatwork_minimum_charge: 1500.0,
        }
    }
}

impl RateConfiguration {
    /// Parse a (possibly partial) rate set from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Override the markup multiplier
    pub fn with_markup(mut self, markup: f64) -> Self {
        self.markup = markup;
        self
    }

    /// Override the hourly labor rate
    pub fn with_hourly_labor_rate(mut self, rate: f64) -> Self {
        self.hourly_labor_rate = rate;
        self
    }

    /// Override the concrete material rate
    pub fn with_concrete_material_rate(mut self, rate: f64) -> Self {
        self.concrete_material_rate_per_cy = rate;
        self
    }

    /// Override the flatwork rate and minimum charge together
    pub fn with_flatwork(mut self, rate_per_sf: f64, minimum_charge: f64) -> Self {
        self.flatwork_rate_per_sf = rate_per_sf;
        self.flatwork_minimum_charge = minimum_charge;
        self
    }

    /// Every coefficient with its JSON field name, in declaration order.
    pub fn named_values(&self) -> [(&'static str, f64); 15] {
        [
            ("markup", self.markup),
            ("hourly_labor_rate", self.hourly_labor_rate),
            ("boulder_rate_per_ton", self.boulder_rate_per_ton),
            ("fill_rate_per_yard", self.fill_rate_per_yard),
            ("wall_labor_hours_per_ton", self.wall_labor_hours_per_ton),
            ("wall_labor_hours_per_fill_yard", self.wall_labor_hours_per_fill_yard),
            ("soil_labor_hours_per_cy", self.soil_labor_hours_per_cy),
            ("compaction_factor", self.compaction_factor),
            ("base_material_rate_per_cy", self.base_material_rate_per_cy),
            ("base_labor_hours_per_cy", self.base_labor_hours_per_cy),
            ("compactor_rental_fee", self.compactor_rental_fee),
            ("waste_factor", self.waste_factor),
            ("concrete_material_rate_per_cy", self.concrete_material_rate_per_cy),
            ("flatwork_rate_per_sf", self.flatwork_rate_per_sf),
            ("flatwork_minimum_charge", self.flatwork_minimum_charge),
        ]
    }

    /// Validate the configuration.
    ///
    /// All coefficients must be finite and non-negative, the markup must be
    /// positive, and the compaction and waste factors must be at least 1.0
    /// (never buy less than the design volume).
    pub fn validate(&self) -> CalcResult<()> {
        for (name, value) in self.named_values() {
            if !value.is_finite() {
                return Err(rate_error(name, value, "Rate must be a finite number"));
            }
            if value < 0.0 {
                return Err(rate_error(name, value, "Rate cannot be negative"));
            }
        }
        if self.markup <= 0.0 {
            return Err(rate_error("markup", self.markup, "Markup must be positive"));
        }
        if self.compaction_factor < 1.0 {
            return Err(rate_error(
                "compaction_factor",
                self.compaction_factor,
                "Loose volume cannot be less than compacted volume",
            ));
        }
        if self.waste_factor < 1.0 {
            return Err(rate_error(
                "waste_factor",
                self.waste_factor,
                "Ordered volume cannot be less than design volume",
            ));
        }
        Ok(())
    }
}

fn rate_error(name: &str, value: f64, reason: &str) -> CalcError {
    CalcError::invalid_input(format!("rates.{}", name), value.to_string(), reason)
}
