// 🚗 Vehicle Entity - Plate identity + billing category
//
// A vehicle references its owner by license id, not by pointer:
// the registry stays the single owner and lifetime authority for
// both collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// VEHICLE CATEGORY
// ============================================================================

/// Billing category - closed set, each mapped to its own hourly rate
/// by the tariff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleCategory {
    /// Compact / sedan
    Compact,

    /// Sport utility vehicle
    Suv,

    /// Truck / heavy vehicle
    Truck,
}

impl VehicleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Compact => "compact",
            VehicleCategory::Suv => "suv",
            VehicleCategory::Truck => "truck",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a category string is not one of the closed set.
/// An unknown category is a caller configuration error and fails loudly
/// at the parse boundary instead of defaulting to some rate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown vehicle category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for VehicleCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(VehicleCategory::Compact),
            "suv" => Ok(VehicleCategory::Suv),
            "truck" => Ok(VehicleCategory::Truck),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

// ============================================================================
// VEHICLE ENTITY
// ============================================================================

/// A registered vehicle.
///
/// Identity: `plate` (never changes)
/// `owner_license` is a key reference into the registry's owner
/// collection; the owner must exist at creation time and is never
/// reassigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Plate - unique key, immutable after creation
    pub plate: String,

    /// Model year
    pub year: i32,

    /// Color (display value, not validated)
    pub color: String,

    /// License id of the one owner this vehicle belongs to
    pub owner_license: String,

    /// Billing category
    pub category: VehicleCategory,

    /// When this vehicle was registered
    pub registered_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(
        plate: String,
        year: i32,
        color: String,
        owner_license: String,
        category: VehicleCategory,
    ) -> Self {
        Vehicle {
            plate,
            year,
            color,
            owner_license,
            category,
            registered_at: Utc::now(),
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
    fn test_vehicle_creation() {
        let vehicle = Vehicle::new(
            "ABC123".to_string(),
            2020,
            "red".to_string(),
            "111".to_string(),
            VehicleCategory::Compact,
        );

        assert_eq!(vehicle.plate, "ABC123");
        assert_eq!(vehicle.year, 2020);
        assert_eq!(vehicle.color, "red");
        assert_eq!(vehicle.owner_license, "111");
        assert_eq!(vehicle.category, VehicleCategory::Compact);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("compact".parse(), Ok(VehicleCategory::Compact));
        assert_eq!("SUV".parse(), Ok(VehicleCategory::Suv));
        assert_eq!("Truck".parse(), Ok(VehicleCategory::Truck));
    }

    #[test]
    fn test_category_parse_rejects_unknown() {
        let err = "motorcycle".parse::<VehicleCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("motorcycle".to_string()));
        assert!(err.to_string().contains("motorcycle"));
    }

    #[test]
    fn test_category_as_str_round_trip() {
        for category in [
            VehicleCategory::Compact,
            VehicleCategory::Suv,
            VehicleCategory::Truck,
        ] {
            assert_eq!(category.as_str().parse(), Ok(category));
        }
    }
}
