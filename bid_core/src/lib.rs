//! # bid_core - Site Work Bid Estimation Engine
//!
//! `bid_core` is the computational heart of Groundwork. It turns job
//! measurements for a boulder retaining wall and a concrete slab into material
//! quantities, labor hours, line-item costs, marked-up prices, and an
//! operational handoff for the crew. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Integer Money**: Costs and prices are cents (`i64`), rounded once per component
//! - **Explicit Rates**: Every coefficient comes from a [`RateConfiguration`] passed in
//! - **Rich Errors**: "Not computable" is distinct from a zero-dollar bid
//!
//! ## Quick Start
//!
//! ```rust
//! use bid_core::{compute, MeasurementInput, RateConfiguration};
//!
//! let input = MeasurementInput::slab(500.0, 4.0).with_wall(20.0, 4.0, 5.0);
//! let bid = compute(&input, &RateConfiguration::default()).unwrap();
//!
//! assert_eq!(bid.sections.wall.cost.cents(), 154_500);
//! assert_eq!(bid.totals.price.cents(), 822_861);
//!
//! // Serialize for an API response
//! let json = serde_json::to_string_pretty(&bid).unwrap();
//! assert!(json.contains("handoff"));
//! ```
//!
//! ## Modules
//!
//! - [`estimate`] - Engine facade: input policy, orchestration, batch estimation
//! - [`calculations`] - Line item calculators (wall, soil, road base, pour & finish)
//! - [`handoff`] - Operational handoff projection
//! - [`rates`] - Rate configuration
//! - [`money`] - Integer cents and rounding
//! - [`equations`] - Quantity takeoff formulas
//! - [`units`] - Type-safe unit wrappers
//! - [`request`] - JSON request envelope
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod estimate;
pub mod handoff;
pub mod money;
pub mod rates;
pub mod request;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use estimate::{compute, compute_batch, BidResult, MeasurementInput};
pub use handoff::Handoff;
pub use money::Money;
pub use rates::RateConfiguration;
pub use request::BidRequest;
