// 💰 Tariff - Billing rates and VIP threshold as data
//
// The per-category hourly rates and the VIP hours threshold are
// configuration, not hidden constants: defaults carry the recognized
// values, and a JSON tariff file can override them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::entities::VehicleCategory;

// ============================================================================
// TARIFF
// ============================================================================

/// Billing configuration for the facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// Hourly rate for compact vehicles
    pub compact_rate: f64,

    /// Hourly rate for SUVs
    pub suv_rate: f64,

    /// Hourly rate for trucks
    pub truck_rate: f64,

    /// Owners strictly above this many accumulated hours are VIP
    #[serde(default = "default_vip_hours_threshold")]
    pub vip_hours_threshold: u32,
}

fn default_vip_hours_threshold() -> u32 {
    20
}

impl Tariff {
    /// Load a tariff from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read tariff file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse tariff JSON")
    }

    /// Hourly rate for a billing category
    pub fn rate_for(&self, category: VehicleCategory) -> f64 {
        match category {
            VehicleCategory::Compact => self.compact_rate,
            VehicleCategory::Suv => self.suv_rate,
            VehicleCategory::Truck => self.truck_rate,
        }
    }
}

impl Default for Tariff {
    /// The recognized facility values
    fn default() -> Self {
        Tariff {
            compact_rate: 2.0,
            suv_rate: 3.5,
            truck_rate: 5.0,
            vip_hours_threshold: 20,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates_are_distinct_per_category() {
        let tariff = Tariff::default();

        assert_eq!(tariff.rate_for(VehicleCategory::Compact), 2.0);
        assert_eq!(tariff.rate_for(VehicleCategory::Suv), 3.5);
        assert_eq!(tariff.rate_for(VehicleCategory::Truck), 5.0);
        assert_eq!(tariff.vip_hours_threshold, 20);
    }

    #[test]
    fn test_tariff_from_json() {
        let json = r#"{
            "compact_rate": 1.5,
            "suv_rate": 2.5,
            "truck_rate": 4.0,
            "vip_hours_threshold": 50
        }"#;

        let tariff: Tariff = serde_json::from_str(json).unwrap();
        assert_eq!(tariff.rate_for(VehicleCategory::Truck), 4.0);
        assert_eq!(tariff.vip_hours_threshold, 50);
    }

    #[test]
    fn test_tariff_threshold_defaults_when_missing() {
        let json = r#"{
            "compact_rate": 1.0,
            "suv_rate": 2.0,
            "truck_rate": 3.0
        }"#;

        let tariff: Tariff = serde_json::from_str(json).unwrap();
        assert_eq!(tariff.vip_hours_threshold, 20);
    }

    #[test]
    fn test_tariff_rejects_garbage() {
        assert!(serde_json::from_str::<Tariff>("not a tariff").is_err());
    }

    #[test]
    fn test_tariff_from_missing_file() {
        let result = Tariff::from_file("/nonexistent/tariff.json");
        assert!(result.is_err());
    }
}
