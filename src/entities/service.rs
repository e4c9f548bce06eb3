// 🅿️ Parking Service Entity - One completed transaction
//
// A service is immutable once created: entry/exit hours are validated
// by the registry before construction, and the cost is computed and
// stored at creation so later tariff changes never rewrite recorded
// revenue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// PARKING SERVICE ENTITY
// ============================================================================

/// One parking transaction for a vehicle.
///
/// Identity: `id` (UUID - services carry no natural key)
/// `plate` is a key reference into the registry's vehicle collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkingService {
    /// Stable identity (UUID)
    pub id: String,

    /// Plate of the billed vehicle
    pub plate: String,

    /// Entry hour on the facility clock (1-22, validated by the registry)
    pub entry_hour: u32,

    /// Exit hour on the facility clock (2-23, strictly after entry)
    pub exit_hour: u32,

    /// Cost fixed at creation: duration x category rate
    pub cost: f64,

    /// When this service was recorded
    pub registered_at: DateTime<Utc>,
}

impl ParkingService {
    /// Build a service from already-validated hours and a resolved rate.
    pub fn new(plate: String, entry_hour: u32, exit_hour: u32, hourly_rate: f64) -> Self {
        let duration = exit_hour - entry_hour;

        ParkingService {
            id: uuid::Uuid::new_v4().to_string(),
            plate,
            entry_hour,
            exit_hour,
            cost: duration as f64 * hourly_rate,
            registered_at: Utc::now(),
        }
    }

    /// Billed duration in whole hours (no fractional billing)
    pub fn duration_hours(&self) -> u32 {
        self.exit_hour - self.entry_hour
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_creation() {
        let service = ParkingService::new("ABC123".to_string(), 8, 12, 2.0);

        assert!(!service.id.is_empty());
        assert_eq!(service.plate, "ABC123");
        assert_eq!(service.entry_hour, 8);
        assert_eq!(service.exit_hour, 12);
        assert_eq!(service.duration_hours(), 4);
        assert_eq!(service.cost, 8.0);
    }

    #[test]
    fn test_one_hour_service() {
        let service = ParkingService::new("ABC123".to_string(), 22, 23, 5.0);

        assert_eq!(service.duration_hours(), 1);
        assert_eq!(service.cost, 5.0);
    }

    #[test]
    fn test_each_service_gets_its_own_id() {
        let a = ParkingService::new("ABC123".to_string(), 8, 12, 2.0);
        let b = ParkingService::new("ABC123".to_string(), 8, 12, 2.0);

        assert_ne!(a.id, b.id);
    }
}
