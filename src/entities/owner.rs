// 👤 Owner Entity - Identity + loyalty hours
//
// An owner is identified by a license id that never changes.
// The hours accumulator only grows; VIP status is derived from it
// against the tariff threshold, never stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// OWNER ENTITY
// ============================================================================

/// A registered owner of one or more vehicles.
///
/// Identity: `license_id` (never changes)
/// Mutable state: `accumulated_hours` (grows via accumulation only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    /// License identifier - unique key, immutable after creation
    pub license_id: String,

    /// Display name (content not validated)
    pub name: String,

    /// Loyalty hours accumulated across all parking services.
    /// Unsigned on purpose: negative accumulation is unrepresentable.
    pub accumulated_hours: u32,

    /// When this owner was registered
    pub registered_at: DateTime<Utc>,
}

impl Owner {
    /// Create a new owner with zero accumulated hours
    pub fn new(license_id: String, name: String) -> Self {
        Owner {
            license_id,
            name,
            accumulated_hours: 0,
            registered_at: Utc::now(),
        }
    }

    /// Add hours to the loyalty accumulator. Zero is a no-op.
    pub fn accumulate_hours(&mut self, hours: u32) {
        self.accumulated_hours += hours;
    }

    /// VIP status: strictly more accumulated hours than the threshold
    pub fn is_vip(&self, vip_hours_threshold: u32) -> bool {
        self.accumulated_hours > vip_hours_threshold
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_creation() {
        let owner = Owner::new("111".to_string(), "Ana".to_string());

        assert_eq!(owner.license_id, "111");
        assert_eq!(owner.name, "Ana");
        assert_eq!(owner.accumulated_hours, 0);
    }

    #[test]
    fn test_accumulate_hours_is_monotonic() {
        let mut owner = Owner::new("111".to_string(), "Ana".to_string());

        owner.accumulate_hours(4);
        assert_eq!(owner.accumulated_hours, 4);

        owner.accumulate_hours(3);
        assert_eq!(owner.accumulated_hours, 7);

        // Zero adds nothing
        owner.accumulate_hours(0);
        assert_eq!(owner.accumulated_hours, 7);
    }

    #[test]
    fn test_vip_threshold_is_strict() {
        let mut owner = Owner::new("111".to_string(), "Ana".to_string());

        owner.accumulate_hours(20);
        assert!(!owner.is_vip(20)); // Exactly at threshold - not VIP

        owner.accumulate_hours(1);
        assert!(owner.is_vip(20)); // Strictly above - VIP
    }
}
