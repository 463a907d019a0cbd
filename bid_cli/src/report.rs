//! Rendering a priced bid for the terminal.
//!
//! The JSON report wraps the engine's deterministic result with a report id
//! and preparation time; neither feeds back into any figure.

use bid_core::handoff::{ChecklistCategory, ChecklistItem};
use bid_core::{BidRequest, BidResult, MeasurementInput, Money, RateConfiguration};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A priced bid as handed to the customer or another system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidReport {
    /// Report id, unique per pricing run
    pub id: Uuid,

    /// When the report was prepared
    pub prepared_at: DateTime<Utc>,

    /// User label for the bid
    pub label: String,

    /// Measurements as entered
    pub measurements: MeasurementInput,

    /// Rates the bid was priced at
    pub rates: RateConfiguration,

    /// Engine output
    pub result: BidResult,
}

impl BidReport {
    pub fn new(request: &BidRequest, result: BidResult) -> Self {
        BidReport {
            id: Uuid::new_v4(),
            prepared_at: Utc::now(),
            label: request.label.clone(),
            measurements: request.measurements,
            rates: request.rates,
            result,
        }
    }
}

/// Print the bid summary and operational handoff.
pub fn print_summary(report: &BidReport) {
    let bid = &report.result;
    let s = &bid.sections;
    let rates = &report.rates;

    println!("═══════════════════════════════════════");
    println!("  BID SUMMARY{}", label_suffix(&report.label));
    println!("  Prepared {}", report.prepared_at.format("%Y-%m-%d %H:%M UTC"));
    println!("═══════════════════════════════════════");
    println!();

    let wall = &s.wall.quantities;
    println!("Retaining wall:");
    println!("  Square footage:   {} SF", qty(wall.square_feet));
    println!("  Boulder tons:     {} tons", qty(wall.boulder_tons));
    println!("  Boulder cost:     {}", format_money(wall.boulder_cost));
    println!("  Fill dirt cost:   {}", format_money(wall.fill_cost));
    println!("  Labor hours:      {} hrs", qty(wall.labor_hours));
    println!("  Labor cost:       {}", format_money(wall.labor_cost));
    println!("  Total cost:       {}", format_money(s.wall.cost));
    println!("  Total price:      {}", format_money(s.wall.price));
    println!();

    let soil = &s.soil.quantities;
    println!("Concrete - soil removal:");
    println!("  Volume:           {} CY", qty(soil.excavated_cubic_yards));
    println!(
        "  Labor hours:      {} hrs (@ {} hr/CY)",
        qty(soil.labor_hours),
        rates.soil_labor_hours_per_cy
    );
    println!("  Cost:             {}", format_money(s.soil.cost));
    println!("  Price:            {}", format_money(s.soil.price));
    println!();

    let base = &s.road_base.quantities;
    println!("Concrete - road base:");
    println!(
        "  Design CY:        {} CY, loose {} CY",
        qty(base.design_cubic_yards),
        qty(base.loose_cubic_yards)
    );
    println!(
        "  Material:         {} (@ ${}/CY)",
        format_money(base.material_cost),
        rates.base_material_rate_per_cy
    );
    println!(
        "  Labor:            {} ({} hrs @ ${}/hr)",
        format_money(base.labor_cost),
        qty(base.labor_hours),
        rates.hourly_labor_rate
    );
    println!("  Compactor:        {}", format_money(base.compactor_fee));
    println!("  Cost:             {}", format_money(s.road_base.cost));
    println!("  Price:            {}", format_money(s.road_base.price));
    println!();

    let pour = &s.concrete.quantities;
    println!("Concrete - pour & finish:");
    println!("  Ordered CY:       {} CY", qty(pour.ordered_cubic_yards));
    println!(
        "  Material:         {} (@ ${}/CY)",
        format_money(pour.material_cost),
        rates.concrete_material_rate_per_cy
    );
    println!(
        "  Flatwork:         {}{}",
        format_money(pour.flatwork_cost),
        if pour.flatwork_minimum_applied { " (minimum charge)" } else { "" }
    );
    println!("  Cost:             {}", format_money(s.concrete.cost));
    println!("  Price:            {}", format_money(s.concrete.price));
    println!();

    println!(
        "Concrete section:   cost {}  price {}",
        format_money(bid.concrete_section.cost),
        format_money(bid.concrete_section.price)
    );
    println!();
    println!("═══════════════════════════════════════");
    println!("  TOTAL COST:  {}", format_money(bid.totals.cost));
    println!("  TOTAL PRICE: {}", format_money(bid.totals.price));
    println!("═══════════════════════════════════════");
    println!();

    print_handoff(report);
}

fn print_handoff(report: &BidReport) {
    let h = &report.result.handoff;

    println!("Operational handoff:");
    if h.wall.labor_hours > 0.0 {
        println!(
            "  - Retaining wall: {} labor hrs; boulders {} tons; fill {} yd",
            qty(h.wall.labor_hours),
            qty(h.wall.boulder_tons),
            qty(h.wall.fill_yards)
        );
    }
    println!(
        "  - Install prep: {} labor hrs; excavate {} CY to {} in",
        qty(h.install_prep.total_labor_hours),
        qty(h.install_prep.excavated_cubic_yards),
        h.install_prep.excavation_depth_in
    );
    println!(
        "  - Road base: {} CY loose at {} in; labor {} hrs{}",
        qty(h.road_base.loose_cubic_yards),
        h.road_base.depth_in,
        qty(h.road_base.labor_hours),
        if h.road_base.compactor_reserved { "; compactor reserved" } else { "" }
    );
    println!(
        "  - Concrete: {} CY design at {} in, order {} CY; material budget {}; flatwork budget {}",
        qty(h.concrete.design_cubic_yards),
        h.concrete.thickness_in,
        qty(h.concrete.ordered_cubic_yards),
        format_money(h.concrete.material_budget),
        format_money(h.concrete.flatwork_budget)
    );
    println!("  - Total labor: {} hrs", qty(h.total_labor_hours));

    for category in [
        ChecklistCategory::Crew,
        ChecklistCategory::Equipment,
        ChecklistCategory::Logistics,
        ChecklistCategory::SignOff,
    ] {
        println!("  - {}: {}", category.display_name(), checklist_line(&h.checklist, category));
    }
}

fn checklist_line(items: &[ChecklistItem], category: ChecklistCategory) -> String {
    items
        .iter()
        .filter(|item| item.category() == category)
        .map(|item| item.text())
        .collect::<Vec<_>>()
        .join("; ")
}

fn label_suffix(label: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!(" - {}", label)
    }
}

fn qty(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format cents as US dollars with thousands separators, e.g. `$1,234.56`.
pub fn format_money(amount: Money) -> String {
    let cents = amount.cents();
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = (abs / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{:02}", sign, grouped, abs % 100)
}
