//! # Bid Requests
//!
//! A JSON envelope pairing one job's measurements with the rates to price it
//! at. This is the shape an API caller or an assistant hands the engine.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "Smith backyard",
//!   "measurements": {
//!     "length_ft": 20.0,
//!     "height_ft": 4.0,
//!     "fill_yards": 5.0,
//!     "slab_area_sf": 500.0,
//!     "thickness_in": 4.0
//!   },
//!   "rates": { "markup": 1.43 }
//! }
//! ```
//!
//! `rates` may be omitted entirely, or list only the coefficients to override.
//!
//! ## Example
//!
//! ```rust
//! use bid_core::request::BidRequest;
//!
//! let request = BidRequest::from_json(
//!     r#"{ "label": "Patio", "measurements": { "slab_area_sf": 100.0, "thickness_in": 4.0 } }"#,
//! ).unwrap();
//! let bid = request.estimate().unwrap();
//! assert_eq!(bid.sections.concrete.quantities.flatwork_cost.cents(), 150_000);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::estimate::{compute, BidResult, MeasurementInput};
use crate::rates::RateConfiguration;

/// One bid request: measurements plus the rates to price them at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidRequest {
    /// User label for this bid (e.g., customer or site name)
    #[serde(default)]
    pub label: String,

    /// Job measurements
    pub measurements: MeasurementInput,

    /// Rate configuration; defaults apply to any coefficient not given
    #[serde(default)]
    pub rates: RateConfiguration,
}

impl BidRequest {
    /// Create a request priced at default rates.
    pub fn new(label: impl Into<String>, measurements: MeasurementInput) -> Self {
        BidRequest {
            label: label.into(),
            measurements,
            rates: RateConfiguration::default(),
        }
    }

    /// Replace the rate configuration
    pub fn with_rates(mut self, rates: RateConfiguration) -> Self {
        self.rates = rates;
        self
    }

    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the request to pretty JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Price the request.
    pub fn estimate(&self) -> CalcResult<BidResult> {
        compute(&self.measurements, &self.rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REQUEST: &str = r#"{
        "label": "Smith backyard",
        "measurements": {
            "length_ft": 20.0,
            "height_ft": 4.0,
            "fill_yards": 5.0,
            "slab_area_sf": 500.0,
            "thickness_in": 4.0,
            "base_depth_in": 6.0
        },
        "rates": { "markup": 1.43 }
    }"#;

    #[test]
    fn test_parse_full_request() {
        let request = BidRequest::from_json(FULL_REQUEST).unwrap();
        assert_eq!(request.label, "Smith backyard");
        assert_eq!(request.measurements.base_depth_in, Some(6.0));
        assert_eq!(request.rates, RateConfiguration::default());

        let bid = request.estimate().unwrap();
        assert_eq!(bid.totals.price.cents(), 822_861);
        assert_eq!(bid.handoff.road_base.depth_in, 6.0);
    }

    #[test]
    fn test_rate_override() {
        let request = BidRequest::from_json(
            r#"{ "measurements": { "slab_area_sf": 500.0, "thickness_in": 4.0 },
                 "rates": { "concrete_material_rate_per_cy": 135.0 } }"#,
        )
        .unwrap();
        assert_eq!(request.label, "");
        assert_eq!(request.rates.concrete_material_rate_per_cy, 135.0);
        assert_eq!(request.rates.markup, 1.43);

        let bid = request.estimate().unwrap();
        // 7.4074 CY * $135 = $1,000.00
        assert_eq!(bid.sections.concrete.quantities.material_cost.cents(), 100_000);
    }

    #[test]
    fn test_missing_measurements_rejected() {
        let err = BidRequest::from_json(r#"{ "label": "nothing" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_not_computable_request() {
        let request = BidRequest::new("Wall only", MeasurementInput::default().with_wall(20.0, 4.0, 5.0));
        assert!(request.estimate().unwrap_err().is_not_computable());
    }

    #[test]
    fn test_json_roundtrip() {
        let request = BidRequest::new("Patio", MeasurementInput::slab(100.0, 4.0))
            .with_rates(RateConfiguration::default().with_markup(1.5));
        let json = request.to_json().unwrap();
        let back = BidRequest::from_json(&json).unwrap();
        assert_eq!(request, back);
    }
}
