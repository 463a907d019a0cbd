//! Reading measurements and rates from the user.
//!
//! Raw entry is converted to numbers here. Blank, unparsable, or non-finite
//! entries fall back to the prompt's default; the engine applies its own input
//! policy to whatever arrives.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bid_core::{BidRequest, MeasurementInput, RateConfiguration};

/// Load a bid request from a JSON file.
pub fn load_request(path: &Path) -> Result<BidRequest> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading bid request {}", path.display()))?;
    let request = BidRequest::from_json(&json)
        .with_context(|| format!("parsing bid request {}", path.display()))?;
    Ok(request)
}

/// Load a rate configuration from a JSON file.
pub fn load_rates(path: &Path) -> Result<RateConfiguration> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading rates {}", path.display()))?;
    let rates = RateConfiguration::from_json(&json)
        .with_context(|| format!("parsing rates {}", path.display()))?;
    Ok(rates)
}

/// Prompt for every measurement of a bid.
pub fn prompt_request() -> BidRequest {
    println!("Groundwork - Retaining Wall & Concrete Bid");
    println!("==========================================");
    println!();

    let label = prompt_line("Bid label []: ").unwrap_or_default();

    println!();
    println!("Retaining wall (leave blank for no wall)");
    let length_ft = prompt_f64("  Wall length (ft) [0]: ", 0.0);
    let height_ft = prompt_f64("  Wall height (ft) [0]: ", 0.0);
    let fill_yards = prompt_f64("  Fill dirt (yd) [0]: ", 0.0);

    println!();
    println!("Concrete slab");
    let slab_area_sf = prompt_f64("  Slab area (SF): ", 0.0);
    let thickness_in = prompt_f64("  Thickness (in) [4]: ", 4.0);
    let base_depth_in = prompt_optional_f64("  Road base depth (in) [same as slab]: ");
    let excavation_depth_in = prompt_optional_f64("  Excavation depth (in) [same as slab]: ");
    println!();

    let measurements = MeasurementInput {
        length_ft,
        height_ft,
        fill_yards,
        slab_area_sf,
        thickness_in,
        excavation_depth_in,
        base_depth_in,
    };

    BidRequest::new(label, measurements)
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }

    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|entry| parse_measurement(&entry))
        .unwrap_or(default)
}

fn prompt_optional_f64(prompt: &str) -> Option<f64> {
    prompt_line(prompt).and_then(|entry| parse_measurement(&entry))
}

/// Parse one raw entry; `None` for blank, unparsable, or non-finite text.
fn parse_measurement(entry: &str) -> Option<f64> {
    entry
        .trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_measurement() {
        assert_eq!(parse_measurement("500"), Some(500.0));
        assert_eq!(parse_measurement(" 4.5 "), Some(4.5));
        assert_eq!(parse_measurement("1,250"), Some(1250.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_measurement(""), None);
        assert_eq!(parse_measurement("four"), None);
        assert_eq!(parse_measurement("NaN"), None);
        assert_eq!(parse_measurement("inf"), None);
    }

    #[test]
    fn test_load_request_missing_file() {
        let err = load_request(Path::new("/nonexistent/groundwork/request.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("reading bid request"));
    }

    #[test]
    fn test_load_rates_from_file() {
        let path = std::env::temp_dir().join(format!("groundwork_rates_{}.json", std::process::id()));
        fs::write(&path, r#"{ "markup": 1.5 }"#).unwrap();

        let rates = load_rates(&path).unwrap();
        assert_eq!(rates.markup, 1.5);
        assert_eq!(rates.hourly_labor_rate, 48.0);

        let _ = fs::remove_file(&path);
    }
}
