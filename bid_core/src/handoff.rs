//! # Operational Handoff
//!
//! The summary the field crew receives once a bid is accepted: labor hours,
//! material quantities to order, volumes rounded for the ticket, and a fixed
//! crew/equipment/logistics/sign-off checklist.
//!
//! The handoff is a projection of already-priced line items. It performs no
//! cost computation of its own, and every number in it is either copied from a
//! line item or rounded from one for display.

use serde::{Deserialize, Serialize};

use crate::calculations::{PourFinishResult, RoadBaseResult, SoilResult, WallResult};
use crate::equations::round_to_hundredths;
use crate::money::Money;

/// Depths the crew builds to, as measured or defaulted by the facade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteDepths {
    /// Slab thickness (in)
    pub thickness_in: f64,

    /// Excavation depth (in), when specified
    pub excavation_depth_in: Option<f64>,

    /// Road base depth (in), when specified
    pub base_depth_in: Option<f64>,
}

/// Handoff summary for a priced bid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Handoff {
    /// Retaining wall crew and materials
    pub wall: WallHandoff,

    /// Excavation and base preparation
    pub install_prep: InstallPrepHandoff,

    /// Road base order
    pub road_base: RoadBaseHandoff,

    /// Concrete order and budgets
    pub concrete: ConcreteHandoff,

    /// All crew hours on the job
    pub total_labor_hours: f64,

    /// Fixed crew, equipment, logistics, and sign-off items
    pub checklist: [ChecklistItem; 17],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallHandoff {
    pub labor_hours: f64,
    pub boulder_tons: f64,
    pub fill_yards: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallPrepHandoff {
    /// Soil removal plus road base hours
    pub total_labor_hours: f64,
    pub excavated_cubic_yards: f64,
    pub excavation_depth_in: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadBaseHandoff {
    pub loose_cubic_yards: f64,
    pub labor_hours: f64,
    pub depth_in: f64,
    pub compactor_reserved: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcreteHandoff {
    pub design_cubic_yards: f64,
    pub ordered_cubic_yards: f64,
    pub thickness_in: f64,
    /// Concrete material cost carried from the pour & finish line (cents)
    pub material_budget: Money,
    /// Flatwork cost carried from the pour & finish line (cents)
    pub flatwork_budget: Money,
}

impl Handoff {
    /// Project the handoff from priced line items.
    pub fn from_sections(
        wall: &WallResult,
        soil: &SoilResult,
        road_base: &RoadBaseResult,
        pour_finish: &PourFinishResult,
        depths: SiteDepths,
    ) -> Self {
        let wall_q = &wall.quantities;
        let soil_q = &soil.quantities;
        let base_q = &road_base.quantities;
        let pour_q = &pour_finish.quantities;

        let prep_hours = soil_q.labor_hours + base_q.labor_hours;

        Handoff {
            wall: WallHandoff {
                labor_hours: round_to_hundredths(wall_q.labor_hours),
                boulder_tons: round_to_hundredths(wall_q.boulder_tons),
                fill_yards: round_to_hundredths(wall_q.fill_yards),
            },
            install_prep: InstallPrepHandoff {
                total_labor_hours: round_to_hundredths(prep_hours),
                excavated_cubic_yards: round_to_hundredths(soil_q.excavated_cubic_yards),
                excavation_depth_in: depths.excavation_depth_in.unwrap_or(depths.thickness_in),
            },
            road_base: RoadBaseHandoff {
                loose_cubic_yards: round_to_hundredths(base_q.loose_cubic_yards),
                labor_hours: round_to_hundredths(base_q.labor_hours),
                depth_in: depths.base_depth_in.unwrap_or(depths.thickness_in),
                compactor_reserved: base_q.compactor_fee > Money::ZERO,
            },
            concrete: ConcreteHandoff {
                design_cubic_yards: round_to_hundredths(pour_q.design_cubic_yards),
                ordered_cubic_yards: round_to_hundredths(pour_q.ordered_cubic_yards),
                thickness_in: depths.thickness_in,
                material_budget: pour_q.material_cost,
                flatwork_budget: pour_q.flatwork_cost,
            },
            total_labor_hours: round_to_hundredths(wall_q.labor_hours + prep_hours),
            checklist: ChecklistItem::ALL,
        }
    }
}

/// Checklist grouping for renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecklistCategory {
    Crew,
    Equipment,
    Logistics,
    SignOff,
}

impl ChecklistCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ChecklistCategory::Crew => "Crew",
            ChecklistCategory::Equipment => "Equipment",
            ChecklistCategory::Logistics => "Logistics",
            ChecklistCategory::SignOff => "Sign-offs",
        }
    }
}

/// One fixed handoff checklist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChecklistItem {
    WallCrew,
    ConcreteCrew,
    Excavator,
    SkidSteer,
    PlateCompactor,
    Forms,
    ConcreteSaw,
    Ppe,
    SiteAccess,
    UtilityLocate,
    DeliveryWindows,
    DisposalSite,
    SignOffThickness,
    SignOffBaseDepth,
    SignOffJointLayout,
    SignOffFinish,
    SignOffCuring,
}

impl ChecklistItem {
    /// Every item, in checklist order
    pub const ALL: [ChecklistItem; 17] = [
        ChecklistItem::WallCrew,
        ChecklistItem::ConcreteCrew,
        ChecklistItem::Excavator,
        ChecklistItem::SkidSteer,
        ChecklistItem::PlateCompactor,
        ChecklistItem::Forms,
        ChecklistItem::ConcreteSaw,
        ChecklistItem::Ppe,
        ChecklistItem::SiteAccess,
        ChecklistItem::UtilityLocate,
        ChecklistItem::DeliveryWindows,
        ChecklistItem::DisposalSite,
        ChecklistItem::SignOffThickness,
        ChecklistItem::SignOffBaseDepth,
        ChecklistItem::SignOffJointLayout,
        ChecklistItem::SignOffFinish,
        ChecklistItem::SignOffCuring,
    ];

    pub fn category(&self) -> ChecklistCategory {
        use ChecklistItem::*;
        match self {
            WallCrew | ConcreteCrew => ChecklistCategory::Crew,
            Excavator | SkidSteer | PlateCompactor | Forms | ConcreteSaw | Ppe => {
                ChecklistCategory::Equipment
            }
            SiteAccess | UtilityLocate | DeliveryWindows | DisposalSite => {
                ChecklistCategory::Logistics
            }
            SignOffThickness | SignOffBaseDepth | SignOffJointLayout | SignOffFinish
            | SignOffCuring => ChecklistCategory::SignOff,
        }
    }

    pub fn text(&self) -> &'static str {
        use ChecklistItem::*;
        match self {
            WallCrew => "Wall crew: boulder set, backfill",
            ConcreteCrew => "Concrete crew: excavate, base, forms, pour",
            Excavator => "Excavator",
            SkidSteer => "Skid steer",
            PlateCompactor => "Plate compactor",
            Forms => "Forms",
            ConcreteSaw => "Saw",
            Ppe => "PPE",
            SiteAccess => "Access confirmed",
            UtilityLocate => "Utilities located (811)",
            DeliveryWindows => "Delivery windows",
            DisposalSite => "Disposal site",
            SignOffThickness => "Thickness",
            SignOffBaseDepth => "Base depth",
            SignOffJointLayout => "Joints layout",
            SignOffFinish => "Finish",
            SignOffCuring => "Curing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{pour_finish, road_base, soil, wall};
    use crate::equations::design_cubic_yards;
    use crate::rates::RateConfiguration;
    use crate::units::{Inches, SquareFeet};

    fn test_handoff(depths: SiteDepths) -> (Handoff, SoilResult, RoadBaseResult, PourFinishResult) {
        let rates = RateConfiguration::default();
        let wall = wall::calculate(
            &wall::WallInput {
                length_ft: 20.0,
                height_ft: 4.0,
                fill_yards: 5.0,
            },
            &rates,
        )
        .unwrap();
        let area = SquareFeet(500.0);
        let design = design_cubic_yards(area, Inches(depths.thickness_in));
        let soil = soil::calculate(design, &rates).unwrap();
        let base = road_base::calculate(design, &rates).unwrap();
        let pour = pour_finish::calculate(design, area, &rates).unwrap();
        let handoff = Handoff::from_sections(&wall, &soil, &base, &pour, depths);
        (handoff, soil, base, pour)
    }

    fn four_inch_slab() -> SiteDepths {
        SiteDepths {
            thickness_in: 4.0,
            excavation_depth_in: None,
            base_depth_in: None,
        }
    }

    #[test]
    fn test_rounded_volumes() {
        let (handoff, ..) = test_handoff(four_inch_slab());
        assert_eq!(handoff.concrete.design_cubic_yards, 6.17);
        assert_eq!(handoff.concrete.ordered_cubic_yards, 7.41);
        assert_eq!(handoff.road_base.loose_cubic_yards, 7.41);
        assert_eq!(handoff.install_prep.excavated_cubic_yards, 6.17);
    }

    #[test]
    fn test_labor_rollups() {
        let (handoff, soil, base, _) = test_handoff(four_inch_slab());
        let prep = soil.quantities.labor_hours + base.quantities.labor_hours;
        assert_eq!(handoff.install_prep.total_labor_hours, round_to_hundredths(prep));
        // 3.7037 + 7.4074 = 11.11
        assert_eq!(handoff.install_prep.total_labor_hours, 11.11);
        // 15 wall hours + 11.1111 prep hours
        assert_eq!(handoff.total_labor_hours, 26.11);
        assert_eq!(handoff.wall.labor_hours, 15.0);
    }

    #[test]
    fn test_budgets_are_carried_not_recomputed() {
        let (handoff, _, _, pour) = test_handoff(four_inch_slab());
        assert_eq!(handoff.concrete.material_budget, pour.quantities.material_cost);
        assert_eq!(handoff.concrete.flatwork_budget, pour.quantities.flatwork_cost);
        assert!(handoff.road_base.compactor_reserved);
    }

    #[test]
    fn test_depths_default_to_slab_thickness() {
        let (handoff, ..) = test_handoff(four_inch_slab());
        assert_eq!(handoff.road_base.depth_in, 4.0);
        assert_eq!(handoff.install_prep.excavation_depth_in, 4.0);
        assert_eq!(handoff.concrete.thickness_in, 4.0);
    }

    #[test]
    fn test_specified_depths_reported() {
        let (handoff, ..) = test_handoff(SiteDepths {
            thickness_in: 4.0,
            excavation_depth_in: Some(10.0),
            base_depth_in: Some(6.0),
        });
        assert_eq!(handoff.road_base.depth_in, 6.0);
        assert_eq!(handoff.install_prep.excavation_depth_in, 10.0);
    }

    #[test]
    fn test_checklist_is_complete() {
        let (handoff, ..) = test_handoff(four_inch_slab());
        assert_eq!(handoff.checklist, ChecklistItem::ALL);
        let sign_offs = handoff
            .checklist
            .iter()
            .filter(|item| item.category() == ChecklistCategory::SignOff)
            .count();
        assert_eq!(sign_offs, 5);
        assert_eq!(ChecklistItem::UtilityLocate.text(), "Utilities located (811)");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let (handoff, ..) = test_handoff(four_inch_slab());
        let json = serde_json::to_string(&handoff).unwrap();
        assert!(json.contains("\"SignOffCuring\""));
        let back: Handoff = serde_json::from_str(&json).unwrap();
        assert_eq!(handoff, back);
    }
}
