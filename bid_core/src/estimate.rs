//! # Bid Estimate
//!
//! The engine facade: takes one set of job measurements and a rate
//! configuration and produces a complete [`BidResult`], or declines with
//! [`CalcError::NotComputable`] when there is no slab to estimate.
//!
//! ## Pipeline
//!
//! ```text
//! MeasurementInput ──sanitize──► design CY (once) ──► wall / soil / road base / pour & finish
//!                                                          │
//!                                  concrete section totals ◄┘
//!                                  grand totals (wall + concrete)
//!                                  handoff projection
//! ```
//!
//! ## Input policy
//!
//! [`MeasurementInput::sanitize`] is the only place defaults are applied:
//!
//! - Non-finite values (NaN, ±∞) become 0.0
//! - Negative values become 0.0
//! - Optional depths that are non-finite or not positive are treated as absent
//! - Slab area or thickness that ends up ≤ 0 makes the bid not computable
//!
//! Wall measurements default to zero, since a bid may have no wall.
//!
//! ## Example
//!
//! ```rust
//! use bid_core::estimate::{compute, MeasurementInput};
//! use bid_core::rates::RateConfiguration;
//!
//! let input = MeasurementInput::slab(500.0, 4.0).with_wall(20.0, 4.0, 5.0);
//! let bid = compute(&input, &RateConfiguration::default()).unwrap();
//!
//! assert_eq!(bid.sections.wall.price.cents(), 220_935);
//! assert_eq!(bid.totals.price, bid.sections.wall.price + bid.concrete_section.price);
//!
//! // No slab: the job is not computable, never a $0 bid
//! let err = compute(&MeasurementInput::default(), &RateConfiguration::default()).unwrap_err();
//! assert!(err.is_not_computable());
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calculations::{
    concrete_section_totals, pour_finish, road_base, soil, wall, PourFinishResult,
    RoadBaseResult, SectionTotals, SoilResult, WallInput, WallResult,
};
use crate::equations::design_cubic_yards;
use crate::errors::{CalcError, CalcResult};
use crate::handoff::{Handoff, SiteDepths};
use crate::rates::RateConfiguration;
use crate::units::{Inches, SquareFeet};

/// Job measurements for one bid request.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_ft": 20.0,
///   "height_ft": 4.0,
///   "fill_yards": 5.0,
///   "slab_area_sf": 500.0,
///   "thickness_in": 4.0,
///   "base_depth_in": 6.0
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementInput {
    /// Retaining wall length (ft)
    pub length_ft: f64,

    /// Retaining wall height (ft)
    pub height_ft: f64,

    /// Fill dirt behind the wall (CY)
    pub fill_yards: f64,

    /// Slab area (SF), required
    pub slab_area_sf: f64,

    /// Slab thickness (in), required
    pub thickness_in: f64,

    /// Excavation depth (in); reported on the handoff, defaults to slab thickness
    pub excavation_depth_in: Option<f64>,

    /// Road base depth (in); reported on the handoff, defaults to slab thickness
    pub base_depth_in: Option<f64>,
}

impl MeasurementInput {
    /// A slab-only job
    pub fn slab(slab_area_sf: f64, thickness_in: f64) -> Self {
        MeasurementInput {
            slab_area_sf,
            thickness_in,
            ..MeasurementInput::default()
        }
    }

    /// Add a retaining wall
    pub fn with_wall(mut self, length_ft: f64, height_ft: f64, fill_yards: f64) -> Self {
        self.length_ft = length_ft;
        self.height_ft = height_ft;
        self.fill_yards = fill_yards;
        self
    }

    /// Specify the road base depth
    pub fn with_base_depth(mut self, base_depth_in: f64) -> Self {
        self.base_depth_in = Some(base_depth_in);
        self
    }

    /// Specify the excavation depth
    pub fn with_excavation_depth(mut self, excavation_depth_in: f64) -> Self {
        self.excavation_depth_in = Some(excavation_depth_in);
        self
    }

    /// Apply the input policy and check the job is computable.
    pub fn sanitize(&self) -> CalcResult<SiteMeasurements> {
        let wall = WallInput {
            length_ft: clean("length_ft", self.length_ft),
            height_ft: clean("height_ft", self.height_ft),
            fill_yards: clean("fill_yards", self.fill_yards),
        };

        let slab_area_sf = clean("slab_area_sf", self.slab_area_sf);
        if slab_area_sf <= 0.0 {
            tracing::debug!(slab_area_sf = self.slab_area_sf, "bid not computable: no slab area");
            return Err(CalcError::not_computable(
                "slab_area_sf",
                self.slab_area_sf.to_string(),
                "Slab area must be a positive number",
            ));
        }

        let thickness_in = clean("thickness_in", self.thickness_in);
        if thickness_in <= 0.0 {
            tracing::debug!(thickness_in = self.thickness_in, "bid not computable: no thickness");
            return Err(CalcError::not_computable(
                "thickness_in",
                self.thickness_in.to_string(),
                "Slab thickness must be a positive number",
            ));
        }

        Ok(SiteMeasurements {
            wall,
            slab_area: SquareFeet(slab_area_sf),
            thickness: Inches(thickness_in),
            depths: SiteDepths {
                thickness_in,
                excavation_depth_in: clean_depth("excavation_depth_in", self.excavation_depth_in),
                base_depth_in: clean_depth("base_depth_in", self.base_depth_in),
            },
        })
    }
}

/// Measurements after the input policy has been applied.
///
/// Only produced by [`MeasurementInput::sanitize`]; every value is finite and
/// non-negative, and the slab dimensions are positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteMeasurements {
    pub wall: WallInput,
    pub slab_area: SquareFeet,
    pub thickness: Inches,
    pub depths: SiteDepths,
}

fn clean(field: &str, value: f64) -> f64 {
    if !value.is_finite() {
        tracing::warn!(field, %value, "non-finite measurement replaced with 0");
        return 0.0;
    }
    if value < 0.0 {
        tracing::warn!(field, value, "negative measurement clamped to 0");
        return 0.0;
    }
    value
}

fn clean_depth(field: &str, value: Option<f64>) -> Option<f64> {
    match value {
        Some(depth) if depth.is_finite() && depth > 0.0 => Some(depth),
        Some(depth) => {
            tracing::warn!(field, %depth, "unusable depth ignored");
            None
        }
        None => None,
    }
}

/// The four priced line items of a bid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BidSections {
    /// Retaining wall
    pub wall: WallResult,
    /// Soil removal
    pub soil: SoilResult,
    /// Road base
    pub road_base: RoadBaseResult,
    /// Concrete pour & finish
    pub concrete: PourFinishResult,
}

/// Complete estimate for one bid request.
///
/// Fully determined by the measurements and rates: computing the same inputs
/// twice yields identical results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BidResult {
    /// Shared slab design volume used by every concrete line (CY)
    pub design_cubic_yards: f64,

    /// Priced line items
    pub sections: BidSections,

    /// Soil removal + road base + pour & finish
    pub concrete_section: SectionTotals,

    /// Wall + concrete section
    pub totals: SectionTotals,

    /// Operational handoff summary
    pub handoff: Handoff,
}

/// Estimate one bid.
///
/// # Returns
///
/// * `Ok(BidResult)` - The priced bid
/// * `Err(CalcError::NotComputable)` - Slab area or thickness missing or not positive
/// * `Err(CalcError::InvalidInput)` - The rate configuration is invalid
pub fn compute(input: &MeasurementInput, rates: &RateConfiguration) -> CalcResult<BidResult> {
    rates.validate()?;
    let site = input.sanitize()?;

    let design = design_cubic_yards(site.slab_area, site.thickness);

    let wall = wall::calculate(&site.wall, rates)?;
    let soil = soil::calculate(design, rates)?;
    let road_base = road_base::calculate(design, rates)?;
    let concrete = pour_finish::calculate(design, site.slab_area, rates)?;

    let concrete_section = concrete_section_totals(&soil, &road_base, &concrete);
    let totals = wall.totals() + concrete_section;

    let handoff = Handoff::from_sections(&wall, &soil, &road_base, &concrete, site.depths);

    tracing::debug!(
        design_cy = design.0,
        total_cost = totals.cost.cents(),
        total_price = totals.price.cents(),
        "bid computed"
    );

    Ok(BidResult {
        design_cubic_yards: design.0,
        sections: BidSections {
            wall,
            soil,
            road_base,
            concrete,
        },
        concrete_section,
        totals,
        handoff,
    })
}

/// Estimate many independent bids in parallel.
///
/// Results are returned in input order and are identical to calling
/// [`compute`] on each input.
pub fn compute_batch(inputs: &[MeasurementInput], rates: &RateConfiguration) -> Vec<CalcResult<BidResult>> {
    inputs.par_iter().map(|input| compute(input, rates)).collect()
}
